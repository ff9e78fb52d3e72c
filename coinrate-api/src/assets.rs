/// A cryptocurrency the user can pick, with the id the price API knows it by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub name: &'static str,
    pub id: &'static str,
}

pub const ASSETS: [Asset; 5] = [
    Asset {
        name: "Bitcoin",
        id: "bitcoin",
    },
    Asset {
        name: "Ethereum",
        id: "ethereum",
    },
    Asset {
        name: "Ripple",
        id: "ripple",
    },
    Asset {
        name: "Litecoin",
        id: "litecoin",
    },
    Asset {
        name: "Cardano",
        id: "cardano",
    },
];

/// Looks up an asset by its exact display name.
pub fn by_name(name: &str) -> Option<&'static Asset> {
    ASSETS.iter().find(|asset| asset.name == name)
}

/// Looks up an asset by its 1-based position in the selection list.
pub fn by_position(position: usize) -> Option<&'static Asset> {
    position.checked_sub(1).and_then(|idx| ASSETS.get(idx))
}

#[cfg(test)]
mod tests {
    use super::{by_name, by_position, ASSETS};
    use std::collections::HashSet;

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("Bitcoin").unwrap().id, "bitcoin");
        assert_eq!(by_name("Cardano").unwrap().id, "cardano");
        assert!(by_name("bitcoin").is_none());
        assert!(by_name("Dogecoin").is_none());
        assert!(by_name("").is_none());
    }

    #[test]
    fn test_by_position() {
        assert_eq!(by_position(1).unwrap().name, "Bitcoin");
        assert_eq!(by_position(5).unwrap().name, "Cardano");
        assert!(by_position(0).is_none());
        assert!(by_position(6).is_none());
    }

    #[test]
    fn test_table_is_unambiguous() {
        let names = ASSETS.iter().map(|a| a.name).collect::<HashSet<_>>();
        let ids = ASSETS.iter().map(|a| a.id).collect::<HashSet<_>>();
        assert_eq!(names.len(), ASSETS.len());
        assert_eq!(ids.len(), ASSETS.len());
    }
}
