//! Farm domain records and their list/form schemas

use crate::error::{Result, StoreError};
use crate::state::forms::{
    Address, Coordinates, FieldConfig, FieldKind, FieldValue, FormValues, Pattern, ValidationRule,
};
use crate::state::list::{Column, ListConfig, Listable, SortConfig, SortDirection, SortValue};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The seven entity pages of the admin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    #[default]
    Animals,
    Properties,
    Locations,
    Employees,
    Buyers,
    Suppliers,
    ServiceProviders,
}

impl EntityKind {
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Animals,
        EntityKind::Properties,
        EntityKind::Locations,
        EntityKind::Employees,
        EntityKind::Buyers,
        EntityKind::Suppliers,
        EntityKind::ServiceProviders,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Animals => "Animals",
            Self::Properties => "Properties",
            Self::Locations => "Locations",
            Self::Employees => "Employees",
            Self::Buyers => "Buyers",
            Self::Suppliers => "Suppliers",
            Self::ServiceProviders => "Service Providers",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            Self::Animals => "Animal",
            Self::Properties => "Property",
            Self::Locations => "Location",
            Self::Employees => "Employee",
            Self::Buyers => "Buyer",
            Self::Suppliers => "Supplier",
            Self::ServiceProviders => "Service Provider",
        }
    }

    /// Partner role for the three partner pages
    pub fn partner_role(&self) -> Option<PartnerRole> {
        match self {
            Self::Buyers => Some(PartnerRole::Buyer),
            Self::Suppliers => Some(PartnerRole::Supplier),
            Self::ServiceProviders => Some(PartnerRole::ServiceProvider),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|k| k == self).unwrap_or(0)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

/// Livestock record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: String,
    pub tag: String,
    pub name: String,
    pub breed: String,
    pub sex: String,
    pub status: String,
    pub weight_kg: f64,
    pub birth_date: Option<NaiveDate>,
    pub property: String,
    pub notes: String,
}

/// Farm property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub status: String,
    pub area_hectares: f64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub coordinates: Option<(f64, f64)>,
    pub created_at: DateTime<Utc>,
}

/// Pasture, corral or building inside a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub property: String,
    pub kind: String,
    pub status: String,
    pub capacity: f64,
    pub coordinates: Option<(f64, f64)>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub status: String,
    pub hired_at: Option<NaiveDate>,
}

/// Which partner page a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartnerRole {
    Buyer,
    Supplier,
    ServiceProvider,
}

impl PartnerRole {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Buyer => EntityKind::Buyers,
            Self::Supplier => EntityKind::Suppliers,
            Self::ServiceProvider => EntityKind::ServiceProviders,
        }
    }
}

/// Buyer, supplier or service provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: String,
    pub role: PartnerRole,
    pub name: String,
    pub document: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub status: String,
    pub notes: String,
}

/// Any record shown by the admin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Entity {
    Animal(Animal),
    Property(Property),
    Location(Location),
    Employee(Employee),
    Partner(Partner),
}

fn day_millis(date: Option<NaiveDate>) -> Option<SortValue<'static>> {
    date.map(|d| SortValue::date(d.and_time(NaiveTime::MIN).and_utc()))
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn format_number(value: f64) -> String {
    value.to_string()
}

fn format_coordinates(coordinates: Option<(f64, f64)>) -> FieldValue {
    FieldValue::Coordinates(
        coordinates
            .map(|(lat, lng)| Coordinates {
                latitude: lat.to_string(),
                longitude: lng.to_string(),
            })
            .unwrap_or_default(),
    )
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Animal(_) => EntityKind::Animals,
            Entity::Property(_) => EntityKind::Properties,
            Entity::Location(_) => EntityKind::Locations,
            Entity::Employee(_) => EntityKind::Employees,
            Entity::Partner(p) => p.role.kind(),
        }
    }

    /// Main display name
    pub fn name(&self) -> &str {
        match self {
            Entity::Animal(a) => &a.name,
            Entity::Property(p) => &p.name,
            Entity::Location(l) => &l.name,
            Entity::Employee(e) => &e.name,
            Entity::Partner(p) => &p.name,
        }
    }

    /// Display text for a column, empty for unknown keys
    pub fn cell(&self, key: &str) -> String {
        self.field(key)
            .map(|value| match value {
                SortValue::Text(s) => s.into_owned(),
                SortValue::Number(_) => self.number_cell(key),
            })
            .unwrap_or_default()
    }

    fn number_cell(&self, key: &str) -> String {
        match (self, key) {
            (Entity::Animal(a), "birth_date") => format_date(a.birth_date),
            (Entity::Employee(e), "hired_at") => format_date(e.hired_at),
            (Entity::Property(p), "created_at") => p.created_at.format(DATE_FORMAT).to_string(),
            _ => self
                .field(key)
                .map(|v| v.as_search_text().into_owned())
                .unwrap_or_default(),
        }
    }

    /// Label/value pairs for the detail page, in form order
    pub fn detail_rows(&self) -> Vec<(String, String)> {
        let values = self.to_values();
        form_fields(self.kind())
            .into_iter()
            .map(|field| {
                let value = values
                    .get(&field.name)
                    .map(FieldValue::as_text)
                    .unwrap_or_default();
                (field.label, value)
            })
            .collect()
    }

    /// Initial values for the edit page
    pub fn to_values(&self) -> FormValues {
        let mut values = FormValues::new();
        let mut put = |name: &str, value: FieldValue| {
            values.insert(name.to_string(), value);
        };
        match self {
            Entity::Animal(a) => {
                put("tag", a.tag.clone().into());
                put("name", a.name.clone().into());
                put("breed", a.breed.clone().into());
                put("sex", a.sex.clone().into());
                put("status", a.status.clone().into());
                put("weight_kg", format_number(a.weight_kg).into());
                put("birth_date", format_date(a.birth_date).into());
                put("property", a.property.clone().into());
                put("notes", a.notes.clone().into());
            }
            Entity::Property(p) => {
                put("name", p.name.clone().into());
                put("owner", p.owner.clone().into());
                put("status", p.status.clone().into());
                put("area_hectares", format_number(p.area_hectares).into());
                put(
                    "address",
                    FieldValue::Address(Address {
                        street: p.street.clone(),
                        city: p.city.clone(),
                        state: p.state.clone(),
                        postal_code: p.postal_code.clone(),
                    }),
                );
                put("coordinates", format_coordinates(p.coordinates));
            }
            Entity::Location(l) => {
                put("name", l.name.clone().into());
                put("property", l.property.clone().into());
                put("kind", l.kind.clone().into());
                put("status", l.status.clone().into());
                put("capacity", format_number(l.capacity).into());
                put("coordinates", format_coordinates(l.coordinates));
                put("notes", l.notes.clone().into());
            }
            Entity::Employee(e) => {
                put("name", e.name.clone().into());
                put("role", e.role.clone().into());
                put("email", e.email.clone().into());
                put("phone", e.phone.clone().into());
                put("city", e.city.clone().into());
                put("status", e.status.clone().into());
                put("hired_at", format_date(e.hired_at).into());
            }
            Entity::Partner(p) => {
                put("name", p.name.clone().into());
                put("document", p.document.clone().into());
                put("email", p.email.clone().into());
                put("phone", p.phone.clone().into());
                put("website", p.website.clone().into());
                put(
                    "address",
                    FieldValue::Address(Address {
                        street: p.street.clone(),
                        city: p.city.clone(),
                        state: p.state.clone(),
                        postal_code: p.postal_code.clone(),
                    }),
                );
                put("status", p.status.clone().into());
                put("notes", p.notes.clone().into());
            }
        }
        values
    }

    /// Build a record from submitted form values
    pub fn from_values(kind: EntityKind, id: String, values: &FormValues) -> Result<Entity> {
        let entity = match kind {
            EntityKind::Animals => Entity::Animal(Animal {
                id,
                tag: text(values, "tag"),
                name: text(values, "name"),
                breed: text(values, "breed"),
                sex: text(values, "sex"),
                status: text(values, "status"),
                weight_kg: number(values, "weight_kg")?,
                birth_date: date(values, "birth_date")?,
                property: text(values, "property"),
                notes: text(values, "notes"),
            }),
            EntityKind::Properties => {
                let address = address(values, "address");
                Entity::Property(Property {
                    id,
                    name: text(values, "name"),
                    owner: text(values, "owner"),
                    status: text(values, "status"),
                    area_hectares: number(values, "area_hectares")?,
                    street: address.street,
                    city: address.city,
                    state: address.state,
                    postal_code: address.postal_code,
                    coordinates: coordinates(values, "coordinates")?,
                    created_at: Utc::now(),
                })
            }
            EntityKind::Locations => Entity::Location(Location {
                id,
                name: text(values, "name"),
                property: text(values, "property"),
                kind: text(values, "kind"),
                status: text(values, "status"),
                capacity: number(values, "capacity")?,
                coordinates: coordinates(values, "coordinates")?,
                notes: text(values, "notes"),
            }),
            EntityKind::Employees => Entity::Employee(Employee {
                id,
                name: text(values, "name"),
                role: text(values, "role"),
                email: text(values, "email"),
                phone: text(values, "phone"),
                city: text(values, "city"),
                status: text(values, "status"),
                hired_at: date(values, "hired_at")?,
            }),
            EntityKind::Buyers | EntityKind::Suppliers | EntityKind::ServiceProviders => {
                let address = address(values, "address");
                Entity::Partner(Partner {
                    id,
                    role: kind.partner_role().unwrap_or(PartnerRole::Buyer),
                    name: text(values, "name"),
                    document: text(values, "document"),
                    email: text(values, "email"),
                    phone: text(values, "phone"),
                    website: text(values, "website"),
                    street: address.street,
                    city: address.city,
                    state: address.state,
                    postal_code: address.postal_code,
                    status: text(values, "status"),
                    notes: text(values, "notes"),
                })
            }
        };
        Ok(entity)
    }

    /// Keep fields that are not part of the form (e.g. creation time) from `previous`
    pub fn carry_over(mut self, previous: &Entity) -> Entity {
        if let (Entity::Property(next), Entity::Property(prev)) = (&mut self, previous) {
            next.created_at = prev.created_at;
        }
        self
    }
}

impl Listable for Entity {
    fn id(&self) -> &str {
        match self {
            Entity::Animal(a) => &a.id,
            Entity::Property(p) => &p.id,
            Entity::Location(l) => &l.id,
            Entity::Employee(e) => &e.id,
            Entity::Partner(p) => &p.id,
        }
    }

    fn status(&self) -> &str {
        match self {
            Entity::Animal(a) => &a.status,
            Entity::Property(p) => &p.status,
            Entity::Location(l) => &l.status,
            Entity::Employee(e) => &e.status,
            Entity::Partner(p) => &p.status,
        }
    }

    fn field(&self, key: &str) -> Option<SortValue<'_>> {
        match self {
            Entity::Animal(a) => match key {
                "tag" => Some(SortValue::text(&a.tag)),
                "name" => Some(SortValue::text(&a.name)),
                "breed" => Some(SortValue::text(&a.breed)),
                "sex" => Some(SortValue::text(&a.sex)),
                "status" => Some(SortValue::text(&a.status)),
                "weight_kg" => Some(SortValue::Number(a.weight_kg)),
                "birth_date" => day_millis(a.birth_date),
                "property" => Some(SortValue::text(&a.property)),
                _ => None,
            },
            Entity::Property(p) => match key {
                "name" => Some(SortValue::text(&p.name)),
                "owner" => Some(SortValue::text(&p.owner)),
                "status" => Some(SortValue::text(&p.status)),
                "area_hectares" => Some(SortValue::Number(p.area_hectares)),
                "city" => Some(SortValue::text(&p.city)),
                "state" => Some(SortValue::text(&p.state)),
                "created_at" => Some(SortValue::date(p.created_at)),
                _ => None,
            },
            Entity::Location(l) => match key {
                "name" => Some(SortValue::text(&l.name)),
                "property" => Some(SortValue::text(&l.property)),
                "kind" => Some(SortValue::text(&l.kind)),
                "status" => Some(SortValue::text(&l.status)),
                "capacity" => Some(SortValue::Number(l.capacity)),
                _ => None,
            },
            Entity::Employee(e) => match key {
                "name" => Some(SortValue::text(&e.name)),
                "role" => Some(SortValue::text(&e.role)),
                "email" => Some(SortValue::text(&e.email)),
                "phone" => Some(SortValue::text(&e.phone)),
                "city" => Some(SortValue::text(&e.city)),
                "status" => Some(SortValue::text(&e.status)),
                "hired_at" => day_millis(e.hired_at),
                _ => None,
            },
            Entity::Partner(p) => match key {
                "name" => Some(SortValue::text(&p.name)),
                "document" => Some(SortValue::text(&p.document)),
                "email" => Some(SortValue::text(&p.email)),
                "phone" => Some(SortValue::text(&p.phone)),
                "city" => Some(SortValue::text(&p.city)),
                "state" => Some(SortValue::text(&p.state)),
                "status" => Some(SortValue::text(&p.status)),
                _ => None,
            },
        }
    }
}

fn text(values: &FormValues, name: &str) -> String {
    values
        .get(name)
        .map(|v| v.as_text().trim().to_string())
        .unwrap_or_default()
}

fn number(values: &FormValues, name: &str) -> Result<f64> {
    let raw = text(values, name);
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| StoreError::InvalidValue {
            field: name.to_string(),
            message: format!("'{raw}' is not a number"),
        })
}

fn date(values: &FormValues, name: &str) -> Result<Option<NaiveDate>> {
    let raw = text(values, name);
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(&raw, DATE_FORMAT)
        .map(Some)
        .map_err(|e| StoreError::InvalidValue {
            field: name.to_string(),
            message: e.to_string(),
        })
}

fn address(values: &FormValues, name: &str) -> Address {
    match values.get(name) {
        Some(FieldValue::Address(address)) => Address {
            street: address.street.trim().to_string(),
            city: address.city.trim().to_string(),
            state: address.state.trim().to_string(),
            postal_code: address.postal_code.trim().to_string(),
        },
        _ => Address::default(),
    }
}

fn coordinates(values: &FormValues, name: &str) -> Result<Option<(f64, f64)>> {
    match values.get(name) {
        Some(value @ FieldValue::Coordinates(c)) if !value.is_blank() => {
            c.parsed().map(Some).ok_or_else(|| StoreError::InvalidValue {
                field: name.to_string(),
                message: "latitude and longitude must both be numbers".to_string(),
            })
        }
        _ => Ok(None),
    }
}

fn pattern(regex: &str, message: &str) -> Option<Pattern> {
    match Pattern::new(regex, message) {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            tracing::warn!("invalid field pattern {regex}: {e}");
            None
        }
    }
}

fn date_rule() -> ValidationRule {
    ValidationRule {
        pattern: pattern(r"^\d{4}-\d{2}-\d{2}$", "Use the format YYYY-MM-DD"),
        ..Default::default()
    }
    .custom(|value| {
        let raw = value.as_text();
        match NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) {
            Ok(date) if date > Utc::now().date_naive() => {
                Some("Date cannot be in the future".to_string())
            }
            Ok(_) => None,
            Err(_) => Some("Not a valid calendar date".to_string()),
        }
    })
}

fn coordinates_rule() -> ValidationRule {
    ValidationRule::default().custom(|value| match value {
        FieldValue::Coordinates(c) => match c.parsed() {
            None => Some("Latitude and longitude must both be numbers".to_string()),
            Some((lat, _)) if !(-90.0..=90.0).contains(&lat) => {
                Some("Latitude must be between -90 and 90".to_string())
            }
            Some((_, lng)) if !(-180.0..=180.0).contains(&lng) => {
                Some("Longitude must be between -180 and 180".to_string())
            }
            Some(_) => None,
        },
        _ => None,
    })
}

fn phone_rule() -> ValidationRule {
    ValidationRule {
        pattern: pattern(r"^\+?[\d\s()-]{8,20}$", "Phone must contain 8 to 20 digits"),
        ..Default::default()
    }
}

fn document_rule() -> ValidationRule {
    ValidationRule::default().custom(|value| {
        let digits = value.as_text().chars().filter(char::is_ascii_digit).count();
        if digits == 11 || digits == 14 {
            None
        } else {
            Some("CPF must have 11 digits or CNPJ 14 digits".to_string())
        }
    })
}

fn email_rule() -> ValidationRule {
    ValidationRule {
        email: true,
        ..Default::default()
    }
}

fn notes_rule() -> ValidationRule {
    ValidationRule {
        max_length: Some(500),
        ..Default::default()
    }
}

/// Declared fields of the create/edit form for `kind`
pub fn form_fields(kind: EntityKind) -> Vec<FieldConfig> {
    match kind {
        EntityKind::Animals => vec![
            FieldConfig::text("tag", "Ear tag")
                .required()
                .with_rules(ValidationRule {
                    pattern: pattern(r"^[A-Z]{2}-\d{4}$", "Ear tag must look like BR-0001"),
                    ..Default::default()
                })
                .with_placeholder("BR-0001"),
            FieldConfig::text("name", "Name")
                .required()
                .with_rules(ValidationRule {
                    min_length: Some(2),
                    max_length: Some(60),
                    ..Default::default()
                }),
            FieldConfig::select(
                "breed",
                "Breed",
                &["Nelore", "Angus", "Brahman", "Girolando", "Holandesa", "Senepol"],
            )
            .required(),
            FieldConfig::select("sex", "Sex", &["female", "male"]).required(),
            FieldConfig::select("status", "Status", &["active", "sold", "deceased"]).required(),
            FieldConfig::text("weight_kg", "Weight (kg)").with_rules(ValidationRule {
                min: Some(0.0),
                max: Some(2000.0),
                ..Default::default()
            }),
            FieldConfig::text("birth_date", "Birth date")
                .with_rules(date_rule())
                .with_placeholder("YYYY-MM-DD"),
            FieldConfig::text("property", "Property"),
            FieldConfig::textarea("notes", "Notes").with_rules(notes_rule()),
        ],
        EntityKind::Properties => vec![
            FieldConfig::text("name", "Name").required(),
            FieldConfig::text("owner", "Owner").required(),
            FieldConfig::select("status", "Status", &["active", "inactive"]).required(),
            FieldConfig::text("area_hectares", "Area (ha)")
                .required()
                .with_rules(ValidationRule {
                    min: Some(0.1),
                    ..Default::default()
                }),
            FieldConfig::address("address", "Address").required(),
            FieldConfig::coordinates("coordinates", "Coordinates").with_rules(coordinates_rule()),
        ],
        EntityKind::Locations => vec![
            FieldConfig::text("name", "Name").required(),
            FieldConfig::text("property", "Property").required(),
            FieldConfig::select("kind", "Type", &["pasture", "corral", "barn", "feedlot"])
                .required(),
            FieldConfig::select("status", "Status", &["active", "maintenance", "inactive"])
                .required(),
            FieldConfig::text("capacity", "Capacity (head)").with_rules(ValidationRule {
                min: Some(0.0),
                ..Default::default()
            }),
            FieldConfig::coordinates("coordinates", "Coordinates").with_rules(coordinates_rule()),
            FieldConfig::textarea("notes", "Notes").with_rules(notes_rule()),
        ],
        EntityKind::Employees => vec![
            FieldConfig::text("name", "Name")
                .required()
                .with_rules(ValidationRule {
                    min_length: Some(3),
                    ..Default::default()
                }),
            FieldConfig::select(
                "role",
                "Role",
                &["manager", "cowhand", "veterinarian", "operator", "administrative"],
            )
            .required(),
            FieldConfig::text("email", "Email")
                .required()
                .with_rules(email_rule()),
            FieldConfig::text("phone", "Phone").with_rules(phone_rule()),
            FieldConfig::text("city", "City"),
            FieldConfig::select("status", "Status", &["active", "on-leave", "inactive"])
                .required(),
            FieldConfig::text("hired_at", "Hired on")
                .with_rules(date_rule())
                .with_placeholder("YYYY-MM-DD"),
        ],
        EntityKind::Buyers | EntityKind::Suppliers | EntityKind::ServiceProviders => vec![
            FieldConfig::text("name", "Name").required(),
            FieldConfig::text("document", "CPF/CNPJ")
                .required()
                .with_rules(document_rule()),
            FieldConfig::text("email", "Email").with_rules(email_rule()),
            FieldConfig::text("phone", "Phone").with_rules(phone_rule()),
            FieldConfig::text("website", "Website").with_rules(ValidationRule {
                url: true,
                ..Default::default()
            }),
            FieldConfig::address("address", "Address"),
            FieldConfig::select("status", "Status", &["active", "inactive"]).required(),
            FieldConfig::textarea("notes", "Notes").with_rules(notes_rule()),
        ],
    }
}

/// Default values for a new record of `kind`
pub fn default_values(kind: EntityKind) -> FormValues {
    form_fields(kind)
        .into_iter()
        .filter_map(|field| match field.kind {
            FieldKind::Select { options } => options
                .into_iter()
                .next()
                .map(|option| (field.name, FieldValue::Text(option))),
            _ => None,
        })
        .collect()
}

/// Columns, search fields and status chips for the list page of `kind`
pub fn list_config(kind: EntityKind) -> ListConfig {
    match kind {
        EntityKind::Animals => ListConfig {
            columns: vec![
                Column::new("tag", "Tag", 9),
                Column::new("name", "Name", 16),
                Column::new("breed", "Breed", 11),
                Column::new("sex", "Sex", 7),
                Column::new("weight_kg", "Weight", 8),
                Column::new("birth_date", "Born", 11),
                Column::new("property", "Property", 18),
                Column::new("status", "Status", 9),
            ],
            search_fields: vec!["tag", "name", "breed", "property"],
            statuses: vec!["active", "sold", "deceased"],
            default_sort: SortConfig::new("tag", SortDirection::Asc),
        },
        EntityKind::Properties => ListConfig {
            columns: vec![
                Column::new("name", "Name", 22),
                Column::new("owner", "Owner", 18),
                Column::new("city", "City", 16),
                Column::new("state", "UF", 4),
                Column::new("area_hectares", "Area (ha)", 10),
                Column::new("status", "Status", 9),
            ],
            search_fields: vec!["name", "owner", "city", "state"],
            statuses: vec!["active", "inactive"],
            default_sort: SortConfig::new("name", SortDirection::Asc),
        },
        EntityKind::Locations => ListConfig {
            columns: vec![
                Column::new("name", "Name", 20),
                Column::new("property", "Property", 20),
                Column::new("kind", "Type", 9),
                Column::new("capacity", "Capacity", 9),
                Column::new("status", "Status", 12),
            ],
            search_fields: vec!["name", "property", "kind"],
            statuses: vec!["active", "maintenance", "inactive"],
            default_sort: SortConfig::new("name", SortDirection::Asc),
        },
        EntityKind::Employees => ListConfig {
            columns: vec![
                Column::new("name", "Name", 22),
                Column::new("role", "Role", 14),
                Column::new("email", "Email", 26),
                Column::new("city", "City", 16),
                Column::new("hired_at", "Hired", 11),
                Column::new("status", "Status", 9),
            ],
            search_fields: vec!["name", "role", "email", "city"],
            statuses: vec!["active", "on-leave", "inactive"],
            default_sort: SortConfig::new("name", SortDirection::Asc),
        },
        EntityKind::Buyers | EntityKind::Suppliers | EntityKind::ServiceProviders => ListConfig {
            columns: vec![
                Column::new("name", "Name", 24),
                Column::new("document", "CPF/CNPJ", 19),
                Column::new("city", "City", 16),
                Column::new("state", "UF", 4),
                Column::new("phone", "Phone", 16),
                Column::new("status", "Status", 9),
            ],
            search_fields: vec!["name", "document", "city", "email"],
            statuses: vec!["active", "inactive"],
            default_sort: SortConfig::new("name", SortDirection::Asc),
        },
    }
}
