use std::time::Duration;

use super::model::PopupSettings;

impl Default for PopupSettings {
    fn default() -> Self {
        Self {
            merge_capacity: 6,
            idle_dismiss: Duration::from_secs(30),
            result_dismiss: Duration::from_secs(15),
            error_dismiss: Duration::from_secs(3),
        }
    }
}
