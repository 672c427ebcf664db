use std::env;

use crate::{Error, Result};

/// Environment variable holding the project identifier.
pub const PROJECT_ID_VAR: &str = "PROJECT_ID";
/// Environment variable holding the compute region of the model.
pub const REGION_NAME_VAR: &str = "REGION_NAME";

/// Identifies the project and region that host the model.
///
/// Built once per invocation and threaded explicitly through the pipeline,
/// so nothing downstream reads ambient process state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub project_id: String,
    pub region: String,
}

impl Config {
    /// Read the configuration from `PROJECT_ID` and `REGION_NAME`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require =
            |name: &'static str| lookup(name).ok_or(Error::Configuration { name });
        Ok(Self {
            project_id: require(PROJECT_ID_VAR)?,
            region: require(REGION_NAME_VAR)?,
        })
    }

    /// Compose the full resource name of a model hosted under this project
    /// and region.
    pub fn model_path(&self, model_id: &str) -> String {
        format!(
            "projects/{}/locations/{}/models/{}",
            self.project_id, self.region, model_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars<'a>(
        project: Option<&'a str>,
        region: Option<&'a str>,
    ) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| match name {
            PROJECT_ID_VAR => project.map(str::to_string),
            REGION_NAME_VAR => region.map(str::to_string),
            _ => None,
        }
    }

    #[test]
    fn reads_both_variables() {
        let config = Config::from_vars(vars(Some("proj"), Some("us-central1"))).unwrap();
        assert_eq!(config.project_id, "proj");
        assert_eq!(config.region, "us-central1");
    }

    #[test]
    fn missing_project_id_is_a_configuration_error() {
        let err = Config::from_vars(vars(None, Some("us-central1"))).unwrap_err();
        assert!(matches!(err, Error::Configuration { name: PROJECT_ID_VAR }));
    }

    #[test]
    fn missing_region_is_a_configuration_error() {
        let err = Config::from_vars(vars(Some("proj"), None)).unwrap_err();
        assert!(matches!(err, Error::Configuration { name: REGION_NAME_VAR }));
    }

    #[test]
    fn model_path_composes_the_resource_name() {
        let config = Config {
            project_id: "proj".into(),
            region: "us-central1".into(),
        };
        assert_eq!(
            config.model_path("ICN123"),
            "projects/proj/locations/us-central1/models/ICN123"
        );
    }
}
