//! Meeting domain model.

use crate::model::id::{new_entity_id, EntityId, Identified};
use crate::model::lenient;
use serde::{Deserialize, Serialize};

/// Scheduled meeting. Has no references to other records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub agenda: String,
    /// Calendar date, `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: String,
    /// Wall-clock time, `HH:MM`.
    #[serde(default, deserialize_with = "lenient::text")]
    pub time: String,
    /// Free-text attendee names in the order they were entered.
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub attendees: Vec<String>,
}

impl Identified for Meeting {
    fn id(&self) -> &str {
        &self.id
    }
}

/// User-entered meeting data before an id is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMeeting {
    pub title: String,
    pub agenda: String,
    pub date: String,
    pub time: String,
    pub attendees: Vec<String>,
}

impl NewMeeting {
    pub fn into_meeting(self) -> Meeting {
        Meeting {
            id: new_entity_id(),
            title: self.title,
            agenda: self.agenda,
            date: self.date,
            time: self.time,
            attendees: self.attendees,
        }
    }
}

/// Partial meeting update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingPatch {
    pub title: Option<String>,
    pub agenda: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub attendees: Option<Vec<String>>,
}

impl MeetingPatch {
    pub fn apply_to(self, meeting: &mut Meeting) {
        if let Some(title) = self.title {
            meeting.title = title;
        }
        if let Some(agenda) = self.agenda {
            meeting.agenda = agenda;
        }
        if let Some(date) = self.date {
            meeting.date = date;
        }
        if let Some(time) = self.time {
            meeting.time = time;
        }
        if let Some(attendees) = self.attendees {
            meeting.attendees = attendees;
        }
    }
}
