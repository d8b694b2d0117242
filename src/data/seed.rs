//! Sample records loaded into a fresh in-memory store

use crate::state::entities::{
    Animal, Employee, Entity, Location, Partner, PartnerRole, Property,
};
use chrono::{Duration, NaiveDate, TimeZone, Utc};

const ANIMAL_COUNT: usize = 64;

const ANIMAL_NAMES: &[&str] = &[
    "Mimosa", "Estrela", "Malhada", "Bonita", "Pintada", "Serena", "Princesa", "Faísca",
    "Trovão", "Valente", "Brasão", "Jatobá", "Cigana", "Garoa", "Pérola", "Canela",
];

const BREEDS: &[&str] = &["Nelore", "Angus", "Brahman", "Girolando", "Holandesa", "Senepol"];

const PROPERTIES: &[(&str, &str, &str, &str, f64, (f64, f64))] = &[
    (
        "Fazenda Boa Vista",
        "João Carvalho",
        "Ribeirão Preto",
        "SP",
        812.5,
        (-21.1775, -47.8103),
    ),
    (
        "Sítio São José",
        "Maria Aparecida Lima",
        "Uberaba",
        "MG",
        146.0,
        (-19.7472, -47.9381),
    ),
    (
        "Fazenda Santa Helena",
        "Antônio Ribeiro",
        "Campo Grande",
        "MS",
        2310.0,
        (-20.4697, -54.6201),
    ),
];

pub fn animals() -> Vec<Entity> {
    let base = NaiveDate::from_ymd_opt(2016, 1, 10);
    (0..ANIMAL_COUNT)
        .map(|i| {
            let status = if i % 17 == 16 {
                "deceased"
            } else if i % 9 == 8 {
                "sold"
            } else {
                "active"
            };
            let name = ANIMAL_NAMES[i % ANIMAL_NAMES.len()];
            let generation = i / ANIMAL_NAMES.len();
            Entity::Animal(Animal {
                id: format!("animal-{:03}", i + 1),
                tag: format!("BR-{:04}", i + 1),
                name: if generation == 0 {
                    name.to_string()
                } else {
                    format!("{name} {}", generation + 1)
                },
                breed: BREEDS[i % BREEDS.len()].to_string(),
                sex: if i % 3 == 0 { "male" } else { "female" }.to_string(),
                status: status.to_string(),
                weight_kg: 280.0 + ((i * 37) % 420) as f64,
                birth_date: base.map(|d| d + Duration::days((i as i64) * 41)),
                property: PROPERTIES[i % PROPERTIES.len()].0.to_string(),
                notes: String::new(),
            })
        })
        .collect()
}

pub fn properties() -> Vec<Entity> {
    PROPERTIES
        .iter()
        .enumerate()
        .map(|(i, (name, owner, city, state, area, coordinates))| {
            Entity::Property(Property {
                id: format!("property-{:03}", i + 1),
                name: name.to_string(),
                owner: owner.to_string(),
                status: "active".to_string(),
                area_hectares: *area,
                street: format!("Rodovia Estadual, km {}", 12 + i * 7),
                city: city.to_string(),
                state: state.to_string(),
                postal_code: String::new(),
                coordinates: Some(*coordinates),
                created_at: Utc
                    .with_ymd_and_hms(2019 + i as i32, 3, 1, 12, 0, 0)
                    .single()
                    .unwrap_or_else(Utc::now),
            })
        })
        .collect()
}

pub fn locations() -> Vec<Entity> {
    let rows: &[(&str, usize, &str, &str, f64)] = &[
        ("Pasto do Córrego", 0, "pasture", "active", 120.0),
        ("Pasto da Sede", 0, "pasture", "active", 80.0),
        ("Curral Principal", 0, "corral", "active", 200.0),
        ("Galpão de Feno", 1, "barn", "maintenance", 0.0),
        ("Piquete 3", 1, "pasture", "inactive", 40.0),
        ("Confinamento Norte", 2, "feedlot", "active", 650.0),
        ("Curral de Manejo", 2, "corral", "active", 180.0),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (name, property, kind, status, capacity))| {
            let (_, _, _, _, _, (lat, lng)) = PROPERTIES[*property];
            Entity::Location(Location {
                id: format!("location-{:03}", i + 1),
                name: name.to_string(),
                property: PROPERTIES[*property].0.to_string(),
                kind: kind.to_string(),
                status: status.to_string(),
                capacity: *capacity,
                coordinates: Some((lat + 0.001 * i as f64, lng - 0.001 * i as f64)),
                notes: String::new(),
            })
        })
        .collect()
}

pub fn employees() -> Vec<Entity> {
    let rows: &[(&str, &str, &str, &str, &str)] = &[
        ("Carlos Henrique Souza", "manager", "carlos.souza", "Ribeirão Preto", "active"),
        ("Ana Paula Ferreira", "veterinarian", "ana.ferreira", "Uberaba", "active"),
        ("José Roberto Alves", "cowhand", "jose.alves", "Ribeirão Preto", "active"),
        ("Luiz Fernando Costa", "operator", "luiz.costa", "Campo Grande", "on-leave"),
        ("Beatriz Gonçalves", "administrative", "beatriz.goncalves", "Ribeirão Preto", "active"),
        ("Sebastião Moreira", "cowhand", "sebastiao.moreira", "Campo Grande", "inactive"),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (name, role, user, city, status))| {
            Entity::Employee(Employee {
                id: format!("employee-{:03}", i + 1),
                name: name.to_string(),
                role: role.to_string(),
                email: format!("{user}@boavista.agr.br"),
                phone: format!("+55 16 99{:03}-{:04}", 100 + i * 11, 1000 + i * 357),
                city: city.to_string(),
                status: status.to_string(),
                hired_at: NaiveDate::from_ymd_opt(2015 + i as i32, 1 + (i as u32 % 12), 15),
            })
        })
        .collect()
}

pub fn partners() -> Vec<Entity> {
    let rows: &[(PartnerRole, &str, &str, &str, &str, &str)] = &[
        (
            PartnerRole::Buyer,
            "Frigorífico Vale do Rio Grande",
            "12.345.678/0001-90",
            "compras@valedoriogrande.com.br",
            "Barretos",
            "SP",
        ),
        (
            PartnerRole::Buyer,
            "Laticínios Serra Azul",
            "23.456.789/0001-01",
            "contato@serraazul.com.br",
            "Uberaba",
            "MG",
        ),
        (
            PartnerRole::Supplier,
            "Agropecuária Sul Rações",
            "34.567.890/0001-12",
            "vendas@sulracoes.com.br",
            "Campo Grande",
            "MS",
        ),
        (
            PartnerRole::Supplier,
            "Casa do Criador",
            "45.678.901/0001-23",
            "loja@casadocriador.com.br",
            "Ribeirão Preto",
            "SP",
        ),
        (
            PartnerRole::ServiceProvider,
            "Transportadora Boiadeira",
            "56.789.012/0001-34",
            "frete@boiadeira.com.br",
            "Barretos",
            "SP",
        ),
        (
            PartnerRole::ServiceProvider,
            "Dr. Paulo Mendes",
            "123.456.789-09",
            "paulo.mendes@vetcampo.com.br",
            "Uberaba",
            "MG",
        ),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (role, name, document, email, city, state))| {
            Entity::Partner(Partner {
                id: format!("partner-{:03}", i + 1),
                role: *role,
                name: name.to_string(),
                document: document.to_string(),
                email: email.to_string(),
                phone: format!("+55 34 3{:03}-{:04}", 200 + i * 13, 4000 + i * 91),
                website: String::new(),
                street: String::new(),
                city: city.to_string(),
                state: state.to_string(),
                postal_code: String::new(),
                status: if i == 3 { "inactive" } else { "active" }.to_string(),
                notes: String::new(),
            })
        })
        .collect()
}
