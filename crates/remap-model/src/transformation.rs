//! Second-stage transformations applied after type coercion.
//!
//! Mapping documents carry transformations as free-form strings
//! (`"uppercase"`, `"date:dd/MM/yyyy:yyyy-MM-dd"`, the legacy
//! `"dateFormat:FMT"` form). That string is a tagged union in disguise, so it
//! is parsed exactly once into [`Transformation`] when a configuration is
//! loaded, never re-parsed per cell.

use std::fmt;

use crate::error::{ModelError, Result};

/// Date format used when a grammar segment is empty or omitted.
pub const DEFAULT_DATE_FORMAT: &str = "yyyy-MM-dd";

/// A parsed second-stage transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transformation {
    Uppercase,
    Lowercase,
    Trim,
    /// Auto-detect the source date format, emit `target`.
    DateAuto { target: String },
    /// Parse with an explicit `source` format, emit `target`.
    DateExplicit { source: String, target: String },
}

fn defaulted(segment: &str) -> String {
    if segment.is_empty() {
        DEFAULT_DATE_FORMAT.to_string()
    } else {
        segment.to_string()
    }
}

impl Transformation {
    /// Parse a transformation spec string.
    ///
    /// Returns `Ok(None)` for the empty spec (passthrough) and an error for
    /// anything outside the grammar; import validation rejects the whole
    /// document on such an error.
    pub fn parse_spec(spec: &str) -> Result<Option<Self>> {
        match spec {
            "" => Ok(None),
            "uppercase" => Ok(Some(Transformation::Uppercase)),
            "lowercase" => Ok(Some(Transformation::Lowercase)),
            "trim" => Ok(Some(Transformation::Trim)),
            "date" => Ok(Some(Transformation::DateAuto {
                target: DEFAULT_DATE_FORMAT.to_string(),
            })),
            _ => {
                // Legacy form: auto-detect source, explicit target.
                if let Some(rest) = spec.strip_prefix("dateFormat:") {
                    return Ok(Some(Transformation::DateAuto {
                        target: defaulted(rest),
                    }));
                }
                if let Some(rest) = spec.strip_prefix("date:") {
                    let parts: Vec<&str> = rest.split(':').collect();
                    return match parts.as_slice() {
                        [target] => Ok(Some(Transformation::DateAuto {
                            target: defaulted(target),
                        })),
                        [source, target] => Ok(Some(Transformation::DateExplicit {
                            source: defaulted(source),
                            target: defaulted(target),
                        })),
                        _ => Err(ModelError::UnknownTransformation(spec.to_string())),
                    };
                }
                Err(ModelError::UnknownTransformation(spec.to_string()))
            }
        }
    }
}

impl fmt::Display for Transformation {
    /// Regenerates a spec string that parses back to the same variant.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transformation::Uppercase => f.write_str("uppercase"),
            Transformation::Lowercase => f.write_str("lowercase"),
            Transformation::Trim => f.write_str("trim"),
            Transformation::DateAuto { target } => {
                if target == DEFAULT_DATE_FORMAT {
                    f.write_str("date")
                } else {
                    write!(f, "date:{target}")
                }
            }
            Transformation::DateExplicit { source, target } => {
                write!(f, "date:{source}:{target}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_keywords() {
        assert_eq!(
            Transformation::parse_spec("uppercase").unwrap(),
            Some(Transformation::Uppercase)
        );
        assert_eq!(
            Transformation::parse_spec("trim").unwrap(),
            Some(Transformation::Trim)
        );
    }

    #[test]
    fn empty_spec_is_passthrough() {
        assert_eq!(Transformation::parse_spec("").unwrap(), None);
    }

    #[test]
    fn bare_date_uses_default_target() {
        assert_eq!(
            Transformation::parse_spec("date").unwrap(),
            Some(Transformation::DateAuto {
                target: DEFAULT_DATE_FORMAT.to_string()
            })
        );
    }

    #[test]
    fn legacy_date_format_is_auto_detect() {
        assert_eq!(
            Transformation::parse_spec("dateFormat:dd.MM.yyyy").unwrap(),
            Some(Transformation::DateAuto {
                target: "dd.MM.yyyy".to_string()
            })
        );
    }

    #[test]
    fn single_argument_date_is_auto_detect_with_target() {
        assert_eq!(
            Transformation::parse_spec("date:dd/MM/yyyy").unwrap(),
            Some(Transformation::DateAuto {
                target: "dd/MM/yyyy".to_string()
            })
        );
    }

    #[test]
    fn two_argument_date_is_explicit() {
        assert_eq!(
            Transformation::parse_spec("date:MM/dd/yyyy:yyyy-MM-dd").unwrap(),
            Some(Transformation::DateExplicit {
                source: "MM/dd/yyyy".to_string(),
                target: "yyyy-MM-dd".to_string(),
            })
        );
    }

    #[test]
    fn empty_segments_default() {
        assert_eq!(
            Transformation::parse_spec("date::dd.MM.yyyy").unwrap(),
            Some(Transformation::DateExplicit {
                source: DEFAULT_DATE_FORMAT.to_string(),
                target: "dd.MM.yyyy".to_string(),
            })
        );
        assert_eq!(
            Transformation::parse_spec("date:").unwrap(),
            Some(Transformation::DateAuto {
                target: DEFAULT_DATE_FORMAT.to_string()
            })
        );
    }

    #[test]
    fn rejects_unknown_specs() {
        assert!(Transformation::parse_spec("reverse").is_err());
        assert!(Transformation::parse_spec("date:a:b:c").is_err());
    }

    #[test]
    fn display_round_trips() {
        let specs = [
            "uppercase",
            "lowercase",
            "trim",
            "date",
            "date:dd/MM/yyyy",
            "date:MM/dd/yyyy:yyyy-MM-dd",
        ];
        for spec in specs {
            let parsed = Transformation::parse_spec(spec).unwrap().unwrap();
            assert_eq!(parsed.to_string(), spec);
        }
        // The legacy form normalizes to the date: form but keeps its meaning.
        let legacy = Transformation::parse_spec("dateFormat:dd.MM.yyyy")
            .unwrap()
            .unwrap();
        assert_eq!(
            Transformation::parse_spec(&legacy.to_string()).unwrap(),
            Some(legacy)
        );
    }
}
