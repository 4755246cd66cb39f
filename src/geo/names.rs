//! Static table bridging geometry feature names to UF codes.

/// The 27 federative units, keyed by the display name used in the geometry
/// resource.
pub const UF_NAMES: [(&str, &str); 27] = [
    ("Acre", "AC"),
    ("Alagoas", "AL"),
    ("Amapá", "AP"),
    ("Amazonas", "AM"),
    ("Bahia", "BA"),
    ("Ceará", "CE"),
    ("Distrito Federal", "DF"),
    ("Espírito Santo", "ES"),
    ("Goiás", "GO"),
    ("Maranhão", "MA"),
    ("Mato Grosso", "MT"),
    ("Mato Grosso do Sul", "MS"),
    ("Minas Gerais", "MG"),
    ("Pará", "PA"),
    ("Paraíba", "PB"),
    ("Paraná", "PR"),
    ("Pernambuco", "PE"),
    ("Piauí", "PI"),
    ("Rio de Janeiro", "RJ"),
    ("Rio Grande do Norte", "RN"),
    ("Rio Grande do Sul", "RS"),
    ("Rondônia", "RO"),
    ("Roraima", "RR"),
    ("Santa Catarina", "SC"),
    ("São Paulo", "SP"),
    ("Sergipe", "SE"),
    ("Tocantins", "TO"),
];

/// Resolve a feature name to its UF code. Any unknown name misses.
pub fn uf_code(name: &str) -> Option<&'static str> {
    UF_NAMES
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn every_name_maps_to_exactly_one_code() {
        let codes: BTreeSet<&str> = UF_NAMES.iter().map(|(_, code)| *code).collect();
        assert_eq!(codes.len(), 27);
        for (name, code) in UF_NAMES {
            assert_eq!(uf_code(name), Some(code));
        }
    }

    #[test]
    fn unknown_names_miss() {
        assert_eq!(uf_code("Buenos Aires"), None);
        assert_eq!(uf_code("são paulo"), None);
        assert_eq!(uf_code(""), None);
    }
}
