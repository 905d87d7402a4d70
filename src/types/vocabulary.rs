//! Open string vocabularies used as discriminators on the wire.
//!
//! Notion adds new kinds over time, so every tag set here carries an
//! `Unrecognized(raw)` fallback: a value this client has never seen decodes
//! fine and re-encodes to the exact same string.

/// Declares an open vocabulary: the known wire strings plus a verbatim fallback.
macro_rules! open_vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value this client doesn't recognize yet, kept verbatim.
            Unrecognized(String),
        }

        impl $name {
            /// The wire representation.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $wire, )+
                    $name::Unrecognized(raw) => raw.as_str(),
                }
            }

            pub fn is_recognized(&self) -> bool {
                !matches!(self, $name::Unrecognized(_))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $wire => $name::$variant, )+
                    other => $name::Unrecognized(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $( $wire => $name::$variant, )+
                    _ => $name::Unrecognized(value),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Ok(Self::from(raw))
            }
        }
    };
}

open_vocabulary! {
    /// The `object` field of every top-level payload.
    pub enum ObjectType {
        User => "user",
        Page => "page",
        Database => "database",
        Block => "block",
        List => "list",
        Error => "error",
    }
}

open_vocabulary! {
    /// Where a page or database lives.
    pub enum ParentType {
        Database => "database_id",
        Page => "page_id",
        Block => "block_id",
        Workspace => "workspace",
    }
}

open_vocabulary! {
    /// Discriminator of property values and property configs.
    pub enum PropertyType {
        Title => "title",
        RichText => "rich_text",
        Number => "number",
        Select => "select",
        MultiSelect => "multi_select",
        Status => "status",
        Date => "date",
        People => "people",
        File => "file",
        Files => "files",
        Checkbox => "checkbox",
        Url => "url",
        Email => "email",
        PhoneNumber => "phone_number",
        Formula => "formula",
        Relation => "relation",
        Rollup => "rollup",
        CreatedTime => "created_time",
        CreatedBy => "created_by",
        LastEditedTime => "last_edited_time",
        LastEditedBy => "last_edited_by",
    }
}

open_vocabulary! {
    pub enum UserType {
        Person => "person",
        Bot => "bot",
    }
}

open_vocabulary! {
    pub enum RichTextType {
        Text => "text",
        Mention => "mention",
        Equation => "equation",
    }
}

open_vocabulary! {
    pub enum MentionType {
        User => "user",
        Page => "page",
        Database => "database",
        Date => "date",
    }
}

open_vocabulary! {
    /// Display format of a number property.
    pub enum NumberFormat {
        Number => "number",
        NumberWithCommas => "number_with_commas",
        Percent => "percent",
        Dollar => "dollar",
        CanadianDollar => "canadian_dollar",
        Euro => "euro",
        Pound => "pound",
        Yen => "yen",
        Ruble => "ruble",
        Rupee => "rupee",
        Won => "won",
        Yuan => "yuan",
        Real => "real",
        Lira => "lira",
        Franc => "franc",
    }
}

open_vocabulary! {
    /// Aggregation applied by a rollup property.
    pub enum RollupFunction {
        CountAll => "count_all",
        CountValues => "count_values",
        CountUniqueValues => "count_unique_values",
        CountEmpty => "count_empty",
        CountNotEmpty => "count_not_empty",
        PercentEmpty => "percent_empty",
        PercentNotEmpty => "percent_not_empty",
        Sum => "sum",
        Average => "average",
        Median => "median",
        Min => "min",
        Max => "max",
        Range => "range",
        ShowOriginal => "show_original",
    }
}

open_vocabulary! {
    pub enum RollupType {
        Number => "number",
        Date => "date",
        Array => "array",
    }
}

open_vocabulary! {
    pub enum FormulaResultType {
        String => "string",
        Number => "number",
        Boolean => "boolean",
        Date => "date",
    }
}

open_vocabulary! {
    pub enum LinkType {
        Url => "url",
    }
}

open_vocabulary! {
    /// Where a file's bytes live: an external URL or Notion-hosted storage.
    pub enum FileType {
        External => "external",
        Hosted => "file",
    }
}

open_vocabulary! {
    pub enum BlockType {
        Paragraph => "paragraph",
        Heading1 => "heading_1",
        Heading2 => "heading_2",
        Heading3 => "heading_3",
        BulletedListItem => "bulleted_list_item",
        NumberedListItem => "numbered_list_item",
        Quote => "quote",
        Toggle => "toggle",
        ToDo => "to_do",
        Code => "code",
        Divider => "divider",
        ChildPage => "child_page",
        ChildDatabase => "child_database",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values_round_trip() {
        let kind: PropertyType = serde_json::from_str(r#""multi_select""#).unwrap();
        assert_eq!(kind, PropertyType::MultiSelect);
        assert_eq!(serde_json::to_string(&kind).unwrap(), r#""multi_select""#);
    }

    #[test]
    fn unknown_values_are_kept_verbatim() {
        let kind: PropertyType = serde_json::from_str(r#""button""#).unwrap();
        assert_eq!(kind, PropertyType::Unrecognized("button".to_string()));
        assert!(!kind.is_recognized());
        assert_eq!(serde_json::to_string(&kind).unwrap(), r#""button""#);
    }

    #[test]
    fn parse_is_infallible() {
        let function: RollupFunction = "median".parse().unwrap();
        assert_eq!(function, RollupFunction::Median);
        assert_eq!(function.to_string(), "median");
        let parent: ParentType = "team_space".parse().unwrap();
        assert_eq!(parent.as_str(), "team_space");
    }
}
