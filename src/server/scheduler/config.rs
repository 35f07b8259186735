use chrono::Duration;

pub mod booking {
    use super::*;

    pub mod expire_unpaid {
        use super::*;

        /// Bookings whose payment is still pending after this long are cancelled
        pub const PAYMENT_TIMEOUT: Duration = Duration::minutes(30);

        /// Cron expression for expiring unpaid bookings
        /// Runs every 15 minutes (00:00, 00:15, 00:30, etc.)
        pub const CRON_EXPRESSION: &str = "0 */15 * * * *";
    }

    pub mod complete_visits {
        /// Cron expression for completing past visits
        /// Runs daily at 19:00 UTC, which is 00:30 IST
        pub const CRON_EXPRESSION: &str = "0 0 19 * * *";
    }
}
