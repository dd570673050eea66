//! Application modules.
//!
//! A module is a named section of functionality that an administrator can
//! enable or disable per non-privileged principal.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    Dashboard,
    #[serde(alias = "painel_bi")]
    BiPanel,
    Students,
    StudentsAtRisk,
    Incidents,
    Attendance,
    Referrals,
    Schools,
    SchoolsLinked,
    Councils,
    Messages,
    Alerts,
    Reports,
    Medications,
    RegisteredSchools,
    RegisteredCouncils,
    ProsecutorAlerts,
    Agencies,
}

impl Module {
    pub const ALL: [Module; 18] = [
        Module::Dashboard,
        Module::BiPanel,
        Module::Students,
        Module::StudentsAtRisk,
        Module::Incidents,
        Module::Attendance,
        Module::Referrals,
        Module::Schools,
        Module::SchoolsLinked,
        Module::Councils,
        Module::Messages,
        Module::Alerts,
        Module::Reports,
        Module::Medications,
        Module::RegisteredSchools,
        Module::RegisteredCouncils,
        Module::ProsecutorAlerts,
        Module::Agencies,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Module::Dashboard => "dashboard",
            Module::BiPanel => "bi_panel",
            Module::Students => "students",
            Module::StudentsAtRisk => "students_at_risk",
            Module::Incidents => "incidents",
            Module::Attendance => "attendance",
            Module::Referrals => "referrals",
            Module::Schools => "schools",
            Module::SchoolsLinked => "schools_linked",
            Module::Councils => "councils",
            Module::Messages => "messages",
            Module::Alerts => "alerts",
            Module::Reports => "reports",
            Module::Medications => "medications",
            Module::RegisteredSchools => "registered_schools",
            Module::RegisteredCouncils => "registered_councils",
            Module::ProsecutorAlerts => "prosecutor_alerts",
            Module::Agencies => "agencies",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModule(pub String);

impl fmt::Display for UnknownModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid module: {}", self.0)
    }
}

impl std::error::Error for UnknownModule {}

impl FromStr for Module {
    type Err = UnknownModule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "painel_bi" {
            return Ok(Module::BiPanel);
        }
        Module::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownModule(s.to_string()))
    }
}

/// Deserializes a module list, dropping names outside the vocabulary.
///
/// A stale or hand-edited entry must not make the whole principal unreadable;
/// an unknown module simply grants nothing.
pub fn deserialize_known_modules<'de, D>(deserializer: D) -> Result<Vec<Module>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<String>> = Option::deserialize(deserializer)?;
    let mut modules: Vec<Module> = raw
        .unwrap_or_default()
        .iter()
        .filter_map(|name| name.parse().ok())
        .collect();
    modules.sort();
    modules.dedup();
    Ok(modules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_round_trips_through_from_str() {
        for module in Module::ALL {
            assert_eq!(module.as_str().parse::<Module>(), Ok(module));
        }
    }

    #[test]
    fn test_legacy_bi_name() {
        assert_eq!("painel_bi".parse::<Module>(), Ok(Module::BiPanel));
        let parsed: Module = serde_json::from_str(r#""painel_bi""#).unwrap();
        assert_eq!(parsed, Module::BiPanel);
    }

    #[test]
    fn test_unknown_module() {
        assert!("payroll".parse::<Module>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&Module::StudentsAtRisk).unwrap(),
            r#""students_at_risk""#
        );
    }

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_known_modules")]
        modules: Vec<Module>,
    }

    #[test]
    fn test_known_modules_drops_unknown_and_duplicates() {
        let holder: Holder =
            serde_json::from_str(r#"{"modules":["students","payroll","students","alerts"]}"#)
                .unwrap();
        assert_eq!(holder.modules, vec![Module::Students, Module::Alerts]);
    }

    #[test]
    fn test_known_modules_null_and_missing() {
        let holder: Holder = serde_json::from_str(r#"{"modules":null}"#).unwrap();
        assert!(holder.modules.is_empty());
        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert!(holder.modules.is_empty());
    }
}
