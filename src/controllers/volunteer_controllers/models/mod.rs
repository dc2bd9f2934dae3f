use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct VolunteerRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub state: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct VolunteerResponse {
    pub success: bool,
    pub message: String,
    pub id: String,
}
