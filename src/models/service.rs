use std::fmt;

use serde::{Deserialize, Serialize};

const SECRET_MASK: &str = "********";

/// Service connection record, one variant per service category
///
/// Each variant carries only the fields meaningful for that category,
/// selected by the `serviceType` tag in the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "serviceType")]
pub enum ServiceConnection {
    Database(DatabaseService),
    Messaging(MessagingService),
    Dashboard(DashboardService),
    Pipeline(PipelineService),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCategory {
    Database,
    Messaging,
    Dashboard,
    Pipeline,
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ServiceCategory::Database => "Database",
            ServiceCategory::Messaging => "Messaging",
            ServiceCategory::Dashboard => "Dashboard",
            ServiceCategory::Pipeline => "Pipeline",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseService {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Engine, e.g. `MySQL` or `Postgres`
    #[serde(default)]
    pub database_service_type: Option<String>,
    #[serde(default)]
    pub host_port: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingService {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub messaging_service_type: Option<String>,
    #[serde(default)]
    pub brokers: Vec<String>,
    #[serde(default)]
    pub schema_registry: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardService {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub dashboard_service_type: Option<String>,
    #[serde(default)]
    pub dashboard_url: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default)]
    pub env: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineService {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub pipeline_service_type: Option<String>,
    #[serde(default)]
    pub pipeline_url: Option<String>,
    /// Catalog API the pipeline's lineage backend reports to
    #[serde(default)]
    pub api_endpoint: Option<String>,
    #[serde(default)]
    pub auth_provider_type: Option<String>,
    /// Client secret for the SSO auth provider
    #[serde(default)]
    pub secret_key: Option<String>,
}

impl ServiceConnection {
    pub fn category(&self) -> ServiceCategory {
        match self {
            ServiceConnection::Database(_) => ServiceCategory::Database,
            ServiceConnection::Messaging(_) => ServiceCategory::Messaging,
            ServiceConnection::Dashboard(_) => ServiceCategory::Dashboard,
            ServiceConnection::Pipeline(_) => ServiceCategory::Pipeline,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ServiceConnection::Database(s) => &s.name,
            ServiceConnection::Messaging(s) => &s.name,
            ServiceConnection::Dashboard(s) => &s.name,
            ServiceConnection::Pipeline(s) => &s.name,
        }
    }

    /// Vendor type within the category (`MySQL`, `Kafka`, `Looker`, `Airflow`, ...)
    pub fn vendor(&self) -> Option<&str> {
        match self {
            ServiceConnection::Database(s) => s.database_service_type.as_deref(),
            ServiceConnection::Messaging(s) => s.messaging_service_type.as_deref(),
            ServiceConnection::Dashboard(s) => s.dashboard_service_type.as_deref(),
            ServiceConnection::Pipeline(s) => s.pipeline_service_type.as_deref(),
        }
    }

    /// Most meaningful address for the service
    pub fn endpoint(&self) -> Option<String> {
        match self {
            ServiceConnection::Database(s) => s.host_port.clone(),
            ServiceConnection::Messaging(s) => {
                if s.brokers.is_empty() {
                    None
                } else {
                    Some(s.brokers.join(","))
                }
            }
            ServiceConnection::Dashboard(s) => s.dashboard_url.clone(),
            ServiceConnection::Pipeline(s) => s.pipeline_url.clone(),
        }
    }

    /// The secret configured for this service, if any
    pub fn secret(&self) -> Option<&str> {
        match self {
            ServiceConnection::Database(s) => s.password.as_deref(),
            ServiceConnection::Dashboard(s) => s.api_key.as_deref().or(s.password.as_deref()),
            ServiceConnection::Pipeline(s) => s.secret_key.as_deref(),
            ServiceConnection::Messaging(_) => None,
        }
    }
}

/// Mask a secret for display
pub fn display_secret(secret: Option<&str>) -> &'static str {
    match secret {
        Some(s) if !s.is_empty() => SECRET_MASK,
        _ => "-",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_database_variant() {
        let json = r#"{
            "serviceType": "Database",
            "name": "mysql_prod",
            "databaseServiceType": "MySQL",
            "hostPort": "db.internal:3306",
            "username": "reader",
            "password": "hunter2"
        }"#;

        let service: ServiceConnection = serde_json::from_str(json).unwrap();
        assert_eq!(service.category(), ServiceCategory::Database);
        assert_eq!(service.name(), "mysql_prod");
        assert_eq!(service.vendor(), Some("MySQL"));
        assert_eq!(service.endpoint().as_deref(), Some("db.internal:3306"));
        assert_eq!(display_secret(service.secret()), SECRET_MASK);
    }

    #[test]
    fn test_deserialize_messaging_variant() {
        let json = r#"{
            "serviceType": "Messaging",
            "name": "kafka",
            "brokers": ["b1:9092", "b2:9092"],
            "schemaRegistry": "http://registry:8081"
        }"#;

        let service: ServiceConnection = serde_json::from_str(json).unwrap();
        assert_eq!(service.endpoint().as_deref(), Some("b1:9092,b2:9092"));
        assert_eq!(display_secret(service.secret()), "-");
        match service {
            ServiceConnection::Messaging(m) => {
                assert_eq!(m.schema_registry.as_deref(), Some("http://registry:8081"))
            }
            other => panic!("expected messaging service, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_dashboard_prefers_api_key() {
        let json = r#"{
            "serviceType": "Dashboard",
            "name": "tableau",
            "dashboardUrl": "https://tableau.example.com",
            "apiKey": "abc",
            "siteName": "analytics",
            "apiVersion": "3.9",
            "server": "prod",
            "env": "us-east"
        }"#;

        let service: ServiceConnection = serde_json::from_str(json).unwrap();
        assert_eq!(service.secret(), Some("abc"));
        assert_eq!(service.endpoint().as_deref(), Some("https://tableau.example.com"));
    }

    #[test]
    fn test_deserialize_pipeline_variant() {
        let json = r#"{
            "serviceType": "Pipeline",
            "name": "airflow",
            "pipelineServiceType": "Airflow",
            "pipelineUrl": "http://airflow:8080",
            "apiEndpoint": "http://localhost:8585",
            "authProviderType": "no-auth"
        }"#;

        let service: ServiceConnection = serde_json::from_str(json).unwrap();
        assert_eq!(service.category().to_string(), "Pipeline");
        assert_eq!(service.vendor(), Some("Airflow"));
        assert_eq!(display_secret(service.secret()), "-");
    }

    #[test]
    fn test_pipeline_secret_key_is_masked() {
        let json = r#"{
            "serviceType": "Pipeline",
            "name": "airflow",
            "apiEndpoint": "http://localhost:8585",
            "authProviderType": "google",
            "secretKey": "google-client-secret"
        }"#;

        let service: ServiceConnection = serde_json::from_str(json).unwrap();
        assert_eq!(service.secret(), Some("google-client-secret"));
        assert_eq!(display_secret(service.secret()), SECRET_MASK);
    }

    #[test]
    fn test_fields_of_other_variants_are_not_meaningful() {
        // A broker list on a database record belongs to no field of that variant
        let json = r#"{"serviceType": "Database", "name": "pg", "brokers": ["x:1"]}"#;
        let service: ServiceConnection = serde_json::from_str(json).unwrap();
        assert_eq!(service.endpoint(), None);
    }

    #[test]
    fn test_unknown_service_type_rejected() {
        let json = r#"{"serviceType": "Storage", "name": "s3"}"#;
        assert!(serde_json::from_str::<ServiceConnection>(json).is_err());
    }

    #[test]
    fn test_missing_name_rejected() {
        let json = r#"{"serviceType": "Pipeline"}"#;
        assert!(serde_json::from_str::<ServiceConnection>(json).is_err());
    }
}
