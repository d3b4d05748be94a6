use serde::{Deserialize, Serialize};

/// Build status as reported by the CI server.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CiBuildStatus {
    Success,
    Failure,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Build record.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CiBuild {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub build_type_id: String,
    #[serde(default)]
    pub status: CiBuildStatus,
    /// Queued, running or finished.
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub branch_name: Option<String>,
}

impl CiBuild {
    pub fn is_success(&self) -> bool {
        self.status == CiBuildStatus::Success
    }
}

/// Build list response.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct CiBuildList {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub build: Vec<CiBuild>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_build_list() {
        let list: CiBuildList = serde_json::from_str(
            r#"{
                "count": 3,
                "href": "/app/rest/builds/?locator=branch:pull/42,state:any,count:9",
                "build": [
                    {"id": 10, "buildTypeId": "Tests_Linux", "status": "SUCCESS", "state": "finished", "branchName": "pull/42"},
                    {"id": 11, "buildTypeId": "Tests_Windows", "status": "FAILURE", "state": "finished", "branchName": "pull/42"},
                    {"id": 12, "buildTypeId": "Perf_Linux", "state": "queued"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(list.count, 3);
        assert_eq!(
            list.build[0],
            CiBuild {
                id: 10,
                build_type_id: "Tests_Linux".into(),
                status: CiBuildStatus::Success,
                state: "finished".into(),
                branch_name: Some("pull/42".into()),
            }
        );
        assert!(list.build[0].is_success());
        assert_eq!(list.build[1].status, CiBuildStatus::Failure);
        assert_eq!(list.build[2].status, CiBuildStatus::Unknown);
        assert!(!list.build[2].is_success());
    }

    #[test]
    fn parse_unknown_status() {
        let build: CiBuild = serde_json::from_str(r#"{"status": "ERROR"}"#).unwrap();
        assert_eq!(build.status, CiBuildStatus::Unknown);
    }

    #[test]
    fn parse_empty_list() {
        let list: CiBuildList = serde_json::from_str(r#"{"count": 0}"#).unwrap();
        assert!(list.build.is_empty());
    }
}
