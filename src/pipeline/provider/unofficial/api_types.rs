use serde::Deserialize;

/// One entry of the `GET /api/v1/staff` response array. Professions come
/// as an uppercase machine key plus lowercase free text.
#[derive(Debug, Clone, Deserialize)]
pub struct StaffMember {
    #[serde(rename = "staffId")]
    pub staff_id: Option<i64>,
    #[serde(rename = "nameRu")]
    pub name_ru: Option<String>,
    #[serde(rename = "nameEn")]
    pub name_en: Option<String>,
    #[serde(rename = "professionKey")]
    pub profession_key: Option<String>,
    #[serde(rename = "professionText")]
    pub profession_text: Option<String>,
}
