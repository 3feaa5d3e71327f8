use crate::{PageResponse, Record};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(deserialize_with = "string_or_number")]
    pub patient_id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub mobile_no: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect();
        if parts.is_empty() {
            format!("Patient #{}", self.patient_id)
        } else {
            parts.join(" ")
        }
    }
}

/// Paging block attached to each patient list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEvent {
    pub page_number: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub total_rows: u32,
    #[serde(default)]
    pub rows_per_page: u32,
}

/// Body of `GET /api/Patient/{clinic}/{state}/{country}/{page}/10`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientPayload {
    #[serde(default)]
    pub patient_list_dto: Vec<Patient>,
    #[serde(default)]
    pub page_event_dto: Option<PageEvent>,
}

impl PatientPayload {
    /// Converts to a page, using `requested_page` when the server omitted
    /// its paging block.
    pub fn into_page(self, requested_page: u32) -> PageResponse<Patient> {
        match self.page_event_dto {
            Some(event) => PageResponse::new(
                self.patient_list_dto,
                event.page_number,
                Some(event.total_pages),
            ),
            None => PageResponse::new(self.patient_list_dto, requested_page, None),
        }
    }
}

impl Record for Patient {
    fn id(&self) -> &str {
        &self.patient_id
    }

    fn headline(&self) -> String {
        self.full_name()
    }

    fn detail(&self) -> String {
        match (&self.mobile_no, &self.email) {
            (Some(phone), Some(email)) => format!("{}  {}", phone, email),
            (Some(phone), None) => phone.clone(),
            (None, Some(email)) => email.clone(),
            (None, None) => String::new(),
        }
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.full_name()),
            ("Mobile", self.mobile_no.clone().unwrap_or_default()),
            ("Email", self.email.clone().unwrap_or_default()),
            ("Id", self.patient_id.clone()),
        ]
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
