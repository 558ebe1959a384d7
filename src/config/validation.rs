//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject entities that declare both `only` and `except`
//! - Check alias format (`<applicationName>.<name>`)
//!
//! # Design Decisions
//! - Validation is a pure function: RestConfig → Result<(), ConfigurationError>
//! - Every entity is checked before any route is synthesized
//! - Returns the first error in declaration order

use crate::config::error::ConfigurationError;
use crate::config::schema::{EntityDeclaration, RestConfig};

/// Validate every entity of the configuration.
pub fn validate_config(config: &RestConfig) -> Result<(), ConfigurationError> {
    config.entities.iter().try_for_each(validate_entity)
}

/// Validate a single entity declaration.
pub fn validate_entity(entity: &EntityDeclaration) -> Result<(), ConfigurationError> {
    let result = check_entity(entity);
    if let Err(e) = &result {
        tracing::warn!(entity = %entity.name, error = %e, "Rejected entity declaration");
    }
    result
}

fn check_entity(entity: &EntityDeclaration) -> Result<(), ConfigurationError> {
    if entity.name.trim().is_empty() {
        return Err(ConfigurationError::EmptyEntityName);
    }

    if entity.has_conflicting_filters() {
        return Err(ConfigurationError::ConflictingFilters {
            entity: entity.name.clone(),
        });
    }

    if let Some(alias) = &entity.alias {
        validate_alias(alias)?;
    }

    Ok(())
}

/// Check that an alias has exactly two non-empty `.`-separated parts.
pub fn validate_alias(alias: &str) -> Result<(), ConfigurationError> {
    let well_formed = match alias.split_once('.') {
        Some((application, name)) => {
            is_alias_part(application) && is_alias_part(name)
        }
        None => false,
    };

    if well_formed {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidAlias {
            alias: alias.to_string(),
        })
    }
}

fn is_alias_part(part: &str) -> bool {
    !part.is_empty()
        && part
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Action;

    #[test]
    fn test_valid_aliases() {
        assert!(validate_alias("app.model").is_ok());
        assert!(validate_alias("my_app.blog-post").is_ok());
    }

    #[test]
    fn test_invalid_aliases() {
        for alias in ["appmodel", "app.", ".model", "app.model.extra", "app model.x", ""] {
            assert_eq!(
                validate_alias(alias),
                Err(ConfigurationError::InvalidAlias {
                    alias: alias.to_string()
                }),
                "alias {alias:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_alias_error_message() {
        let err = validate_alias("appmodel").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid alias supplied, it should conform to the following format \"<applicationName>.<name>\"."
        );
    }

    #[test]
    fn test_conflicting_filters() {
        let entity = EntityDeclaration::new("model")
            .with_only([Action::Index])
            .with_except([Action::Create]);
        let err = validate_entity(&entity).unwrap_err();
        assert_eq!(
            err.to_string(),
            "You can configure only one of \"except\" & \"only\" options."
        );
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(
            validate_entity(&EntityDeclaration::new("  ")),
            Err(ConfigurationError::EmptyEntityName)
        );
    }

    #[test]
    fn test_config_reports_first_invalid_entity() {
        let config = RestConfig::new(vec![
            EntityDeclaration::new("model").with_alias("app.model"),
            EntityDeclaration::new("user").with_alias("appuser"),
            EntityDeclaration::new(""),
        ]);
        assert_eq!(
            validate_config(&config),
            Err(ConfigurationError::InvalidAlias {
                alias: "appuser".to_string()
            })
        );
    }
}
