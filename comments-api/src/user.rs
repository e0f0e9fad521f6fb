#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Avatar {
    pub png: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webp: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct User {
    pub username: String,
    pub image: Avatar,
}

impl User {
    pub fn is(&self, other: &User) -> bool {
        self.username == other.username
    }
}
