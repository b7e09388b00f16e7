//! Fixed reference lists offered by the entry form and the filter panel.
//! The engine itself never checks membership in these lists.

use super::{cycle::ActivityCycle, modality::WorkModality, week::EpiWeek};

pub const LOCALITIES: [&str; 63] = [
    "Alemita",
    "Alto Maron",
    "Antique",
    "Bananeira",
    "Banco Raso",
    "California",
    "Carlos Silva",
    "Castalia",
    "Centro",
    "Centro Comercial",
    "Conceicao",
    "Corbiniano Freire",
    "Daniel Gomes",
    "Fatima",
    "Fernando Gomes",
    "Ferradas",
    "Fonseca",
    "Goes Calmon",
    "Horteiro",
    "Itamaraca",
    "Jacana",
    "Jardim Brasil",
    "Jardim Grapiuna",
    "Jardim Primavera",
    "Joao Soares",
    "Jorge Amado",
    "Lomanto",
    "Mangabinha",
    "Manoel Leão",
    "Maria Matos",
    "Maria Pinheiro",
    "Monte Cristo",
    "Mutuns",
    "N S das Gracas",
    "Nova California",
    "Nova Esperança",
    "Nova Ferradas",
    "Nova Itabuna",
    "Nova Fonseca",
    "Novo Horizonte",
    "Novo S Caetano",
    "Parque Boa Vista",
    "Parque Verde",
    "Pedro Geronimo",
    "Pontalzinho",
    "Roca do Povo",
    "Santa Catarina",
    "Santa Clara",
    "Santa Ines",
    "Santo Antonio",
    "Sao Caetano",
    "Sao Judas",
    "Sao Lourenço",
    "Sao Pedro",
    "Sao Roque",
    "Sarinha",
    "Sinval Palmeira",
    "Taverolandia",
    "Urbis IV",
    "Vila Analia",
    "Vila Paloma",
    "Zildolandia",
    "Zizo",
];

pub fn modalities() -> &'static [WorkModality] {
    &WorkModality::ALL
}

pub fn cycles() -> Vec<ActivityCycle> {
    ActivityCycle::all()
}

pub fn weeks() -> Vec<EpiWeek> {
    EpiWeek::all()
}

/// Case-insensitive lookup in the locality list, returning the canonical spelling.
pub fn canonical_locality(name: &str) -> Option<&'static str> {
    let needle = name.trim().to_lowercase();
    LOCALITIES
        .iter()
        .copied()
        .find(|l| l.to_lowercase() == needle)
}
