//! Chat prompts and the post-type mapping used by the text generation routes.

/// Social network the generated copy is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostType {
    #[default]
    Instagram,
    Facebook,
    Twitter,
    LinkedIn,
}

impl PostType {
    /// Unknown or empty names fall back to Instagram.
    pub fn from_name(name: &str) -> Self {
        match name {
            "instagram" => PostType::Instagram,
            "facebook" => PostType::Facebook,
            "twitter" => PostType::Twitter,
            "linkedin" => PostType::LinkedIn,
            _ => PostType::Instagram,
        }
    }

    pub fn display_text(self) -> &'static str {
        match self {
            PostType::Instagram => "Instagram post",
            PostType::Facebook => "Facebook post",
            PostType::Twitter => "Tweet",
            PostType::LinkedIn => "LinkedIn post",
        }
    }
}

pub const COLOR_NAME_TEMPERATURE: f32 = 0.7;
pub const BACKGROUND_TEMPERATURE: f32 = 0.4;
pub const COPY_TEMPERATURE: f32 = 0.7;

pub const COLOR_NAME_SYSTEM: &str = "You are an AI assistant that provides english color names based on hex color codes. Provide the color name as a JSON response with the proper ColorName.";

pub const BACKGROUND_SYSTEM: &str = "You are an AI Assistant that creates short, simple image descriptions for AI image generation. \nYou will be provided a list of colors, provide the description of a simple background using opposite colors. Provide no explanation as to why choices were made.";

const BACKGROUND_PROMPT_PREFIX: &str = "Simple image background: ";

pub fn color_name_user(hex: &str) -> String {
    format!("Hex Color: {hex}")
}

/// User message for the background description. Empty parts are left out.
pub fn background_user(colors: Option<&str>, copy: Option<&str>) -> String {
    let mut parts = Vec::new();
    if let Some(colors) = colors.filter(|c| !c.is_empty()) {
        parts.push(format!("Colors: {colors}"));
    }
    if let Some(copy) = copy.filter(|c| !c.is_empty()) {
        parts.push(format!("Copy: {copy}"));
    }
    if parts.is_empty() {
        parts.push("Colors: taken from the attached image".to_string());
    }
    parts.join("\n")
}

pub fn copy_system(post_type: PostType) -> String {
    let text = post_type.display_text();
    format!(
        "You are an AI Assistant that creates an {text}. You will be provided marketing copy and your job is to create the text for an {text} including hashtags."
    )
}

pub fn background_image_prompt(description: &str) -> String {
    format!("{BACKGROUND_PROMPT_PREFIX}{description}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_type_names() {
        assert_eq!(PostType::from_name("twitter").display_text(), "Tweet");
        assert_eq!(PostType::from_name("linkedin").display_text(), "LinkedIn post");
        assert_eq!(PostType::from_name("facebook").display_text(), "Facebook post");
        assert_eq!(PostType::from_name("instagram"), PostType::Instagram);
    }

    #[test]
    fn unknown_post_type_is_instagram() {
        assert_eq!(PostType::from_name("tiktok"), PostType::Instagram);
        assert_eq!(PostType::from_name(""), PostType::Instagram);
        assert_eq!(PostType::from_name("Twitter"), PostType::Instagram);
    }

    #[test]
    fn copy_prompt_names_post_type_twice() {
        let prompt = copy_system(PostType::Twitter);
        assert_eq!(prompt.matches("Tweet").count(), 2);
        assert!(prompt.ends_with("including hashtags."));
    }

    #[test]
    fn background_user_message() {
        assert_eq!(background_user(Some("Red, Blue"), None), "Colors: Red, Blue");
        assert_eq!(
            background_user(Some("Teal"), Some("Summer sale")),
            "Colors: Teal\nCopy: Summer sale"
        );
        assert!(background_user(None, Some("")).starts_with("Colors:"));
    }

    #[test]
    fn image_prompt_and_color_name() {
        assert_eq!(
            background_image_prompt("soft teal gradient"),
            "Simple image background: soft teal gradient"
        );
        assert_eq!(color_name_user("FF5733"), "Hex Color: FF5733");
    }
}
