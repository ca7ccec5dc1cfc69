use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Maximum C–N distance (Å) for a peptide bond between adjacent residues.
pub const DEFAULT_MAX_PEPTIDE_BOND_LENGTH: f64 = 1.8;
/// Maximum P–O3' distance (Å) for a phosphodiester bond between adjacent nucleotides.
pub const DEFAULT_MAX_NUCLEOTIDE_BOND_LENGTH: f64 = 2.1;
/// The symmetry operator of the deposited asymmetric unit.
pub const IDENTITY_SYMMETRY_OPERATOR: &str = "1_555";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid cutoff for '{name}': {value} (must be a positive, finite length)")]
    InvalidCutoff { name: &'static str, value: f64 },
}

/// Settings for one bond-making run.
///
/// Every field has a default, so a TOML file only needs the values it changes:
///
/// ```toml
/// max_peptide_bond_length = 1.9
/// ca_only = true
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BondMakerConfig {
    pub max_peptide_bond_length: f64,
    pub max_nucleotide_bond_length: f64,
    /// The structure was parsed with only C-alpha atoms, so side-chain atoms
    /// named in SSBOND/LINK records are expected to be missing.
    pub ca_only: bool,
    /// `_struct_conn` partners must both carry this operator to be bonded.
    pub identity_operator: String,
}

impl Default for BondMakerConfig {
    fn default() -> Self {
        Self {
            max_peptide_bond_length: DEFAULT_MAX_PEPTIDE_BOND_LENGTH,
            max_nucleotide_bond_length: DEFAULT_MAX_NUCLEOTIDE_BOND_LENGTH,
            ca_only: false,
            identity_operator: IDENTITY_SYMMETRY_OPERATOR.to_string(),
        }
    }
}

impl BondMakerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_cutoff("max_peptide_bond_length", self.max_peptide_bond_length)?;
        check_cutoff("max_nucleotide_bond_length", self.max_nucleotide_bond_length)?;
        Ok(())
    }
}

fn check_cutoff(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidCutoff { name, value })
    }
}

#[derive(Default)]
pub struct BondMakerConfigBuilder {
    max_peptide_bond_length: Option<f64>,
    max_nucleotide_bond_length: Option<f64>,
    ca_only: Option<bool>,
    identity_operator: Option<String>,
}

impl BondMakerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_peptide_bond_length(mut self, length: f64) -> Self {
        self.max_peptide_bond_length = Some(length);
        self
    }
    pub fn max_nucleotide_bond_length(mut self, length: f64) -> Self {
        self.max_nucleotide_bond_length = Some(length);
        self
    }
    pub fn ca_only(mut self, ca_only: bool) -> Self {
        self.ca_only = Some(ca_only);
        self
    }
    pub fn identity_operator(mut self, operator: &str) -> Self {
        self.identity_operator = Some(operator.to_string());
        self
    }

    pub fn build(self) -> Result<BondMakerConfig, ConfigError> {
        let defaults = BondMakerConfig::default();
        let config = BondMakerConfig {
            max_peptide_bond_length: self
                .max_peptide_bond_length
                .unwrap_or(defaults.max_peptide_bond_length),
            max_nucleotide_bond_length: self
                .max_nucleotide_bond_length
                .unwrap_or(defaults.max_nucleotide_bond_length),
            ca_only: self.ca_only.unwrap_or(defaults.ca_only),
            identity_operator: self
                .identity_operator
                .unwrap_or(defaults.identity_operator),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_standard_covalent_geometry() {
        let config = BondMakerConfig::default();
        assert_eq!(config.max_peptide_bond_length, 1.8);
        assert_eq!(config.max_nucleotide_bond_length, 2.1);
        assert!(!config.ca_only);
        assert_eq!(config.identity_operator, "1_555");
    }

    #[test]
    fn builder_overrides_only_given_values() {
        let config = BondMakerConfigBuilder::new()
            .max_peptide_bond_length(2.0)
            .ca_only(true)
            .build()
            .unwrap();
        assert_eq!(config.max_peptide_bond_length, 2.0);
        assert_eq!(config.max_nucleotide_bond_length, 2.1);
        assert!(config.ca_only);
        assert_eq!(config.identity_operator, "1_555");
    }

    #[test]
    fn builder_rejects_non_positive_cutoffs() {
        let result = BondMakerConfigBuilder::new()
            .max_nucleotide_bond_length(-1.0)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidCutoff {
                name: "max_nucleotide_bond_length",
                ..
            })
        ));
        assert!(BondMakerConfigBuilder::new()
            .max_peptide_bond_length(f64::NAN)
            .build()
            .is_err());
    }

    #[test]
    fn load_fills_missing_fields_with_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "max_peptide_bond_length = 1.6").unwrap();
        writeln!(file, "identity_operator = \"1_555\"").unwrap();

        let config = BondMakerConfig::load(file.path()).unwrap();
        assert_eq!(config.max_peptide_bond_length, 1.6);
        assert_eq!(config.max_nucleotide_bond_length, 2.1);
    }

    #[test]
    fn load_rejects_unknown_keys_and_invalid_values() {
        let mut unknown = NamedTempFile::new().unwrap();
        writeln!(unknown, "max_disulfide_bond_length = 2.2").unwrap();
        assert!(matches!(
            BondMakerConfig::load(unknown.path()),
            Err(ConfigError::Toml { .. })
        ));

        let mut invalid = NamedTempFile::new().unwrap();
        writeln!(invalid, "max_peptide_bond_length = 0.0").unwrap();
        assert!(matches!(
            BondMakerConfig::load(invalid.path()),
            Err(ConfigError::InvalidCutoff { .. })
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let result = BondMakerConfig::load(Path::new("/nonexistent/bondmaker.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
