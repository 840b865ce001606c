use std::collections::HashMap;

use crate::model::Calendar;

/// service id to calendar lookup. a repeated service id keeps the last calendar.
#[derive(Clone, Debug, Default)]
pub struct CalendarIndex {
    calendars: HashMap<String, Calendar>,
}

impl CalendarIndex {
    pub fn new(calendars: &[Calendar]) -> Self {
        let mut index = HashMap::with_capacity(calendars.len());
        for calendar in calendars.iter() {
            if index
                .insert(calendar.service_id.clone(), calendar.clone())
                .is_some()
            {
                log::debug!(
                    "service_id '{}' appears more than once, keeping the last calendar",
                    calendar.service_id
                );
            }
        }
        Self { calendars: index }
    }

    pub fn get(&self, service_id: &str) -> Option<&Calendar> {
        self.calendars.get(service_id)
    }

    pub fn len(&self) -> usize {
        self.calendars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calendars.is_empty()
    }
}
