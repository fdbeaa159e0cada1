//! Reference resolution policy
//!
//! The one place that decides what counts as a broken reference. Only the
//! target is consulted: headings are never validated and display aliases
//! never affect the outcome. Embeds resolve exactly like links.

use crate::index::VaultIndex;
use crate::traits::Resolver;
use wikilint_parser::Reference;

/// Resolve `reference` against `index` by target name alone.
pub fn resolve(reference: &Reference, index: &VaultIndex) -> bool {
    index.resolve(&reference.target)
}

/// Default [`Resolver`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetResolver;

impl TargetResolver {
    /// Create a new resolver
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for TargetResolver {
    fn resolve(&self, reference: &Reference, index: &VaultIndex) -> bool {
        resolve(reference, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn index() -> VaultIndex {
        let mut builder = VaultIndex::builder();
        builder.insert_file("/vault/Existing.md");
        builder.insert_file("/vault/assets/image.png");
        builder.insert_alias("Nick", "/vault/Existing.md");
        builder.build()
    }

    fn reference(target: &str) -> Reference {
        Reference {
            raw: format!("[[{}]]", target),
            target: target.to_string(),
            heading: None,
            alias: None,
            is_embed: false,
            line: 1,
        }
    }

    #[test]
    fn test_resolves_existing_note() {
        assert!(TargetResolver::new().resolve(&reference("Existing"), &index()));
    }

    #[test]
    fn test_missing_note_is_unresolved() {
        assert!(!TargetResolver::new().resolve(&reference("Missing"), &index()));
    }

    #[test]
    fn test_resolves_alias() {
        assert!(resolve(&reference("nick"), &index()));
    }

    #[test]
    fn test_heading_is_never_validated() {
        let mut r = reference("Existing");
        r.heading = Some("No Such Heading".to_string());
        assert!(resolve(&r, &index()));
    }

    #[test]
    fn test_embed_resolves_like_link() {
        let mut r = reference("image.png");
        r.is_embed = true;
        assert!(resolve(&r, &index()));

        let mut missing = reference("missing.png");
        missing.is_embed = true;
        assert!(!resolve(&missing, &index()));
    }

    proptest! {
        #[test]
        fn resolution_ignores_heading_and_alias(
            target in prop_oneof![Just("Existing".to_string()), Just("Gone".to_string()), "[A-Za-z]{1,10}"],
            heading in proptest::option::of("[A-Za-z ]{0,12}"),
            alias in proptest::option::of("[A-Za-z ]{0,12}"),
        ) {
            let index = index();
            let baseline = resolve(&reference(&target), &index);

            let mut varied = reference(&target);
            varied.heading = heading;
            varied.alias = alias;
            prop_assert_eq!(resolve(&varied, &index), baseline);
        }

        #[test]
        fn resolution_ignores_target_case(target in "[A-Za-z]{1,10}") {
            let index = index();
            let lower = resolve(&reference(&target.to_lowercase()), &index);
            let upper = resolve(&reference(&target.to_uppercase()), &index);
            prop_assert_eq!(lower, upper);
        }
    }
}
