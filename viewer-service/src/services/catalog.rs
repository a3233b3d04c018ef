use crate::dtos::AvatarSummary;

/// The built-in avatars offered to clients. Uploads are never added here.
const BUILTIN_AVATARS: [(&str, &str, &str); 3] = [
    ("avatar_1", "Avatar 1", "/static/avatar1.jpg"),
    ("avatar_2", "Avatar 2", "/static/avatar2.jpg"),
    ("avatar_3", "Avatar 3", "/static/avatar3.jpg"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct AvatarCatalog;

impl AvatarCatalog {
    pub fn list(&self) -> Vec<AvatarSummary> {
        BUILTIN_AVATARS
            .iter()
            .map(|(id, name, thumbnail)| AvatarSummary {
                id: id.to_string(),
                name: name.to_string(),
                thumbnail: thumbnail.to_string(),
            })
            .collect()
    }
}
