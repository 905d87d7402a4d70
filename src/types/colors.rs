open_vocabulary! {
    /// Display color of text, select options and blocks.
    pub enum Color {
        Default => "default",
        Gray => "gray",
        Brown => "brown",
        Orange => "orange",
        Yellow => "yellow",
        Green => "green",
        Blue => "blue",
        Purple => "purple",
        Pink => "pink",
        Red => "red",
        GrayBackground => "gray_background",
        BrownBackground => "brown_background",
        OrangeBackground => "orange_background",
        YellowBackground => "yellow_background",
        GreenBackground => "green_background",
        BlueBackground => "blue_background",
        PurpleBackground => "purple_background",
        PinkBackground => "pink_background",
        RedBackground => "red_background",
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Default
    }
}

impl Color {
    /// Check if this is a background color
    pub fn is_background(&self) -> bool {
        matches!(
            self,
            Color::GrayBackground
                | Color::BrownBackground
                | Color::OrangeBackground
                | Color::YellowBackground
                | Color::GreenBackground
                | Color::BlueBackground
                | Color::PurpleBackground
                | Color::PinkBackground
                | Color::RedBackground
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parsing() {
        assert_eq!(Color::from("red"), Color::Red);
        assert_eq!(Color::from("gray_background"), Color::GrayBackground);
        assert_eq!(
            Color::from("teal"),
            Color::Unrecognized("teal".to_string())
        );
    }

    #[test]
    fn test_background_colors() {
        assert!(!Color::Red.is_background());
        assert!(Color::RedBackground.is_background());
        assert!(!Color::Unrecognized("teal_background".to_string()).is_background());
    }
}
