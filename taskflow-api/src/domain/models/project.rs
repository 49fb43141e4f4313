use time::OffsetDateTime;

use super::ProjectId;
use crate::domain::ProjectError;

pub const DEFAULT_HOURLY_RATE: f64 = 50.0;
pub const DEFAULT_HOURS_WORKED: f64 = 0.0;
pub const DEFAULT_STATUS: &str = "active";

/// A tracked piece of billable work for a client.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub client: String,
    pub hourly_rate: f64,
    pub hours_worked: f64,
    /// Open set, e.g. "active", "completed", "on-hold".
    pub status: String,
    pub description: String,
    pub created_at: OffsetDateTime,
    /// `None` until the first update.
    pub updated_at: Option<OffsetDateTime>,
}

impl Project {
    /// Merge a patch into this project and stamp `updated_at`.
    ///
    /// The patch is checked in full before anything is written, so a
    /// rejected patch leaves the project untouched.
    pub fn apply(&mut self, patch: ProjectPatch, now: OffsetDateTime) -> Result<(), ProjectError> {
        patch.validate()?;

        if let Some(id) = patch.id {
            if id != self.id {
                return Err(ProjectError::validation(format!(
                    "project id cannot be changed (expected {}, got {})",
                    self.id, id
                )));
            }
        }
        if let Some(created_at) = patch.created_at {
            if created_at != self.created_at {
                return Err(ProjectError::validation("createdAt cannot be changed"));
            }
        }

        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(client) = patch.client {
            self.client = client.trim().to_string();
        }
        if let Some(hourly_rate) = patch.hourly_rate {
            self.hourly_rate = hourly_rate;
        }
        if let Some(hours_worked) = patch.hours_worked {
            self.hours_worked = hours_worked;
        }
        if let Some(status) = patch.status {
            self.status = status.trim().to_string();
        }
        if let Some(description) = patch.description {
            self.description = description;
        }

        // Wall clock may step backwards; never stamp before creation.
        self.updated_at = Some(now.max(self.created_at));
        Ok(())
    }
}

/// Caller-supplied fields for a new project.
///
/// Everything is optional at this point; [`NewProject::validate`] enforces
/// the required fields and fills in defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProject {
    pub name: Option<String>,
    pub client: Option<String>,
    pub hourly_rate: Option<f64>,
    pub hours_worked: Option<f64>,
    pub status: Option<String>,
    pub description: Option<String>,
}

impl NewProject {
    pub fn new(name: impl Into<String>, client: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            client: Some(client.into()),
            ..Default::default()
        }
    }

    pub fn with_hourly_rate(mut self, hourly_rate: f64) -> Self {
        self.hourly_rate = Some(hourly_rate);
        self
    }

    pub fn with_hours_worked(mut self, hours_worked: f64) -> Self {
        self.hours_worked = Some(hours_worked);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(self) -> Result<ProjectFields, ProjectError> {
        let name = required_text("name", self.name.as_deref())?;
        let client = required_text("client", self.client.as_deref())?;

        let hourly_rate = self.hourly_rate.unwrap_or(DEFAULT_HOURLY_RATE);
        check_amount("hourlyRate", hourly_rate)?;
        let hours_worked = self.hours_worked.unwrap_or(DEFAULT_HOURS_WORKED);
        check_amount("hoursWorked", hours_worked)?;

        let status = self
            .status
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_STATUS.to_string());

        Ok(ProjectFields {
            name,
            client,
            hourly_rate,
            hours_worked,
            status,
            description: self.description.unwrap_or_default(),
        })
    }
}

/// Validated project contents, ready to be stored under a fresh id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectFields {
    pub name: String,
    pub client: String,
    pub hourly_rate: f64,
    pub hours_worked: f64,
    pub status: String,
    pub description: String,
}

impl ProjectFields {
    pub fn into_project(self, id: ProjectId, created_at: OffsetDateTime) -> Project {
        Project {
            id,
            name: self.name,
            client: self.client,
            hourly_rate: self.hourly_rate,
            hours_worked: self.hours_worked,
            status: self.status,
            description: self.description,
            created_at,
            updated_at: None,
        }
    }
}

/// A partial update.
///
/// `id` and `created_at` are accepted only so that a client echoing a full
/// record back is not refused; they must match the stored values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub id: Option<ProjectId>,
    pub created_at: Option<OffsetDateTime>,
    pub name: Option<String>,
    pub client: Option<String>,
    pub hourly_rate: Option<f64>,
    pub hours_worked: Option<f64>,
    pub status: Option<String>,
    pub description: Option<String>,
}

impl ProjectPatch {
    pub fn validate(&self) -> Result<(), ProjectError> {
        if let Some(name) = self.name.as_deref() {
            required_text("name", Some(name))?;
        }
        if let Some(client) = self.client.as_deref() {
            required_text("client", Some(client))?;
        }
        if let Some(hourly_rate) = self.hourly_rate {
            check_amount("hourlyRate", hourly_rate)?;
        }
        if let Some(hours_worked) = self.hours_worked {
            check_amount("hoursWorked", hours_worked)?;
        }
        if let Some(status) = self.status.as_deref() {
            required_text("status", Some(status))?;
        }
        Ok(())
    }
}

fn required_text(field: &str, value: Option<&str>) -> Result<String, ProjectError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        Some(_) => Err(ProjectError::validation(format!("{field} must not be empty"))),
        None => Err(ProjectError::validation(format!("{field} is required"))),
    }
}

fn check_amount(field: &str, value: f64) -> Result<(), ProjectError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ProjectError::validation(format!(
            "{field} must be a non-negative number"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn stored() -> Project {
        NewProject::new("Logo Design", "StartupXYZ")
            .with_hours_worked(8.0)
            .with_hourly_rate(60.0)
            .validate()
            .unwrap()
            .into_project(ProjectId::new(2), datetime!(2024-03-01 10:00 UTC))
    }

    #[test]
    fn validate_fills_defaults() {
        let fields = NewProject::new("A", "B").validate().unwrap();
        assert_eq!(fields.hourly_rate, 50.0);
        assert_eq!(fields.hours_worked, 0.0);
        assert_eq!(fields.status, "active");
        assert_eq!(fields.description, "");
    }

    #[test]
    fn validate_keeps_explicit_zero_rate() {
        let fields = NewProject::new("A", "B")
            .with_hourly_rate(0.0)
            .validate()
            .unwrap();
        assert_eq!(fields.hourly_rate, 0.0);
    }

    #[test]
    fn validate_requires_name_and_client() {
        let missing_name = NewProject {
            client: Some("B".into()),
            ..Default::default()
        };
        assert!(matches!(
            missing_name.validate(),
            Err(ProjectError::Validation(_))
        ));

        let blank_client = NewProject::new("A", "   ");
        assert!(matches!(
            blank_client.validate(),
            Err(ProjectError::Validation(_))
        ));
    }

    #[test]
    fn validate_rejects_negative_and_non_finite_amounts() {
        assert!(NewProject::new("A", "B")
            .with_hourly_rate(-1.0)
            .validate()
            .is_err());
        assert!(NewProject::new("A", "B")
            .with_hours_worked(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn blank_status_falls_back_to_active() {
        let fields = NewProject::new("A", "B").with_status("  ").validate().unwrap();
        assert_eq!(fields.status, "active");
    }

    #[test]
    fn apply_changes_only_supplied_fields() {
        let mut project = stored();
        let before = project.clone();
        let now = datetime!(2024-03-02 09:30 UTC);

        project
            .apply(
                ProjectPatch {
                    status: Some("on-hold".into()),
                    ..Default::default()
                },
                now,
            )
            .unwrap();

        assert_eq!(project.status, "on-hold");
        assert_eq!(project.id, before.id);
        assert_eq!(project.name, before.name);
        assert_eq!(project.hourly_rate, before.hourly_rate);
        assert_eq!(project.created_at, before.created_at);
        assert_eq!(project.updated_at, Some(now));
    }

    #[test]
    fn apply_rejects_id_change_without_mutating() {
        let mut project = stored();
        let before = project.clone();

        let err = project
            .apply(
                ProjectPatch {
                    id: Some(ProjectId::new(99)),
                    name: Some("Renamed".into()),
                    ..Default::default()
                },
                datetime!(2024-03-02 09:30 UTC),
            )
            .unwrap_err();

        assert!(matches!(err, ProjectError::Validation(_)));
        assert_eq!(project, before);
    }

    #[test]
    fn apply_accepts_echoed_identity() {
        let mut project = stored();
        let patch = ProjectPatch {
            id: Some(project.id),
            created_at: Some(project.created_at),
            hours_worked: Some(10.0),
            ..Default::default()
        };

        project.apply(patch, datetime!(2024-03-02 09:30 UTC)).unwrap();
        assert_eq!(project.hours_worked, 10.0);
    }

    #[test]
    fn apply_rejects_created_at_change() {
        let mut project = stored();
        let patch = ProjectPatch {
            created_at: Some(datetime!(2020-01-01 00:00 UTC)),
            ..Default::default()
        };

        assert!(project.apply(patch, datetime!(2024-03-02 09:30 UTC)).is_err());
    }

    #[test]
    fn apply_rejects_blank_name() {
        let mut project = stored();
        let patch = ProjectPatch {
            name: Some("".into()),
            ..Default::default()
        };

        assert!(project.apply(patch, datetime!(2024-03-02 09:30 UTC)).is_err());
        assert_eq!(project.name, "Logo Design");
    }

    #[test]
    fn updated_at_never_precedes_created_at() {
        let mut project = stored();
        project
            .apply(ProjectPatch::default(), datetime!(2024-01-01 00:00 UTC))
            .unwrap();

        assert_eq!(project.updated_at, Some(project.created_at));
    }
}
