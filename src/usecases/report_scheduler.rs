//! Daily status report use case: count tasks, email the admin once per trigger.
//!
//! Orchestrates TaskRepoPort and MailPort. Does not block the main thread;
//! runs as its own spawned task using tokio::time::sleep.

use crate::domain::{DomainError, Mail};
use crate::ports::{MailPort, TaskRepoPort};
use crate::shared::AdminConfig;
use chrono::{Duration as ChronoDuration, Local, NaiveDateTime};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

const SUBJECT: &str = "Tasks: Once a day email";

/// Scheduler service. Runs a loop: sleep until the configured hour, count
/// tasks, send one report mail, repeat. A failed send is fatal for that run
/// only; the loop continues to the next trigger.
pub struct ReportScheduler {
    repo: Arc<dyn TaskRepoPort>,
    mailer: Arc<dyn MailPort>,
    admin: AdminConfig,
    /// Local hour of day (0-23) when the report fires.
    fire_hour: u32,
}

impl ReportScheduler {
    pub fn new(
        repo: Arc<dyn TaskRepoPort>,
        mailer: Arc<dyn MailPort>,
        admin: AdminConfig,
        fire_hour: u32,
    ) -> Self {
        Self {
            repo,
            mailer,
            admin,
            fire_hour: fire_hour.min(23),
        }
    }

    /// Run the report loop until the process shuts down.
    pub async fn run_loop(&self) {
        info!(
            fire_hour = self.fire_hour,
            to = %self.admin.admin_mail,
            "daily status report scheduled"
        );
        loop {
            let wait = secs_until_next_fire(Local::now().naive_local(), self.fire_hour);
            info!(wait_secs = wait, "sleeping until next status report");
            tokio::time::sleep(Duration::from_secs(wait)).await;

            if let Err(e) = self.send_report().await {
                warn!(error = %e, "status report failed for this run");
            }
        }
    }

    /// One trigger: count tasks and dispatch exactly one mail.
    pub async fn send_report(&self) -> Result<(), DomainError> {
        let count = self.repo.count().await?;
        let mail = build_report_mail(&self.admin, count);
        self.mailer.send(&mail).await?;
        info!(count, to = %mail.to, "status report sent");
        Ok(())
    }
}

/// Seconds from `now` until the next occurrence of `fire_hour:00:00`.
/// If today's fire time has already passed, the next one is tomorrow.
fn secs_until_next_fire(now: NaiveDateTime, fire_hour: u32) -> u64 {
    let fire_today = now
        .date()
        .and_hms_opt(fire_hour.min(23), 0, 0)
        .unwrap_or(now);
    let next = if fire_today > now {
        fire_today
    } else {
        fire_today + ChronoDuration::days(1)
    };
    (next - now).num_seconds().max(0) as u64
}

/// Compose the report mail. The count line uses the singular noun only when
/// exactly one task is stored.
fn build_report_mail(admin: &AdminConfig, count: i64) -> Mail {
    let noun = if count == 1 { "task" } else { "tasks" };
    let body = format!(
        "Hello {},\n\nCurrently in database you got: {} {}\n\nBest regards,\n{} ({})\n{} | {}\n",
        admin.admin_name,
        count,
        noun,
        admin.company_name,
        admin.company_goal,
        admin.company_email,
        admin.company_phone,
    );
    Mail {
        to: admin.admin_mail.clone(),
        cc: None,
        subject: SUBJECT.to_string(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;
    use chrono::NaiveDate;
    use tokio::sync::Mutex;

    struct FixedCountRepo(i64);

    #[async_trait::async_trait]
    impl TaskRepoPort for FixedCountRepo {
        async fn get_all_tasks(&self) -> Result<Vec<Task>, DomainError> {
            Ok(Vec::new())
        }
        async fn get_task(&self, id: i64) -> Result<Task, DomainError> {
            Err(DomainError::TaskNotFound(id))
        }
        async fn save_task(&self, _task: &Task) -> Result<Task, DomainError> {
            Err(DomainError::Repo("read-only".to_string()))
        }
        async fn delete_task(&self, id: i64) -> Result<(), DomainError> {
            Err(DomainError::TaskNotFound(id))
        }
        async fn count(&self) -> Result<i64, DomainError> {
            Ok(self.0)
        }
    }

    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<Mail>>,
    }

    #[async_trait::async_trait]
    impl MailPort for RecordingMailer {
        async fn send(&self, mail: &Mail) -> Result<(), DomainError> {
            self.sent.lock().await.push(mail.clone());
            Ok(())
        }
    }

    struct FailingMailer;

    #[async_trait::async_trait]
    impl MailPort for FailingMailer {
        async fn send(&self, _mail: &Mail) -> Result<(), DomainError> {
            Err(DomainError::Mail("relay unreachable".to_string()))
        }
    }

    fn admin() -> AdminConfig {
        AdminConfig {
            admin_mail: "admin@example.com".to_string(),
            admin_name: "Admin".to_string(),
            company_name: "Acme".to_string(),
            company_goal: "ship".to_string(),
            company_email: "hello@acme.example".to_string(),
            company_phone: "+1 555 0100".to_string(),
        }
    }

    #[tokio::test]
    async fn single_task_uses_singular_noun() {
        let mailer = Arc::new(RecordingMailer::default());
        let scheduler = ReportScheduler::new(
            Arc::new(FixedCountRepo(1)),
            mailer.clone(),
            admin(),
            9,
        );

        scheduler.send_report().await.unwrap();

        let sent = mailer.sent.lock().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Tasks: Once a day email");
        assert_eq!(sent[0].to, "admin@example.com");
        assert!(sent[0].body.contains("Currently in database you got: 1 task\n"));
        assert!(!sent[0].body.contains("1 tasks"));
    }

    #[tokio::test]
    async fn other_counts_use_plural_noun() {
        for count in [0, 2, 5] {
            let mailer = Arc::new(RecordingMailer::default());
            let scheduler = ReportScheduler::new(
                Arc::new(FixedCountRepo(count)),
                mailer.clone(),
                admin(),
                9,
            );

            scheduler.send_report().await.unwrap();

            let sent = mailer.sent.lock().await;
            assert_eq!(sent.len(), 1, "exactly one send per trigger");
            let expected = format!("Currently in database you got: {} tasks\n", count);
            assert!(sent[0].body.contains(&expected), "body: {}", sent[0].body);
        }
    }

    #[tokio::test]
    async fn send_failure_surfaces_for_the_run() {
        let scheduler = ReportScheduler::new(
            Arc::new(FixedCountRepo(3)),
            Arc::new(FailingMailer),
            admin(),
            9,
        );

        assert!(matches!(
            scheduler.send_report().await.unwrap_err(),
            DomainError::Mail(_)
        ));
    }

    #[test]
    fn report_body_carries_company_signature() {
        let mail = build_report_mail(&admin(), 2);
        assert!(mail.body.starts_with("Hello Admin,"));
        assert!(mail.body.contains("Acme (ship)"));
        assert!(mail.body.contains("hello@acme.example | +1 555 0100"));
    }

    #[test]
    fn next_fire_is_later_today_when_hour_not_reached() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        assert_eq!(secs_until_next_fire(now, 9), 3600);
    }

    #[test]
    fn next_fire_rolls_to_tomorrow_when_hour_passed() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert_eq!(secs_until_next_fire(now, 9), 23 * 3600);
    }

    #[test]
    fn fire_exactly_at_hour_waits_a_full_day() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(secs_until_next_fire(now, 9), 24 * 3600);
    }
}
