// ID Provider Port (for deterministic testing)

/// Identifier provider interface (allows deterministic ids in tests)
pub trait IdProvider: Send + Sync {
    /// Generate a new globally unique pattern id
    fn generate_id(&self) -> String;
}

/// UUID v4 provider (production)
///
/// Backed by the process CSPRNG. Concurrent calls need no coordination
/// and carry no shared counter; collision probability is negligible for
/// the lifetime of the process. Randomness exhaustion is the only
/// failure mode, and it aborts rather than degrading.
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn generate_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn ids_are_version_4_rfc_variant() {
        let id = UuidProvider.generate_id();
        let parsed = uuid::Uuid::parse_str(&id).expect("well-formed uuid");
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.get_variant(), uuid::Variant::RFC4122);
    }

    #[test]
    fn ids_use_hyphenated_lowercase_groups() {
        let id = UuidProvider.generate_id();
        let groups: Vec<&str> = id.split('-').collect();
        assert_eq!(
            groups.iter().map(|g| g.len()).collect::<Vec<_>>(),
            [8, 4, 4, 4, 12]
        );
        assert!(id
            .chars()
            .all(|c| c == '-' || c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn ids_do_not_repeat() {
        let provider = UuidProvider;
        let ids: HashSet<String> = (0..10_000).map(|_| provider.generate_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn concurrent_generation_stays_unique() {
        let provider = Arc::new(UuidProvider);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let provider = Arc::clone(&provider);
                std::thread::spawn(move || {
                    (0..1_000)
                        .map(|_| provider.generate_id())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all = HashSet::new();
        for handle in handles {
            for id in handle.join().expect("generator thread panicked") {
                assert!(all.insert(id), "duplicate id across threads");
            }
        }
    }
}
