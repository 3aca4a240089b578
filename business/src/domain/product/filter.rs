/// Optional search filters over the catalog.
///
/// `text` matches name or description case-insensitively; `size`, `color`
/// and `category` must match exactly. Blank values are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub text: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub category: Option<String>,
}

impl ProductFilter {
    pub fn new(
        text: Option<String>,
        size: Option<String>,
        color: Option<String>,
        category: Option<String>,
    ) -> Self {
        Self {
            text: non_blank(text),
            size: non_blank(size),
            color: non_blank(color),
            category: non_blank(category),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.size.is_none() && self.color.is_none() && self.category.is_none()
    }
}

impl std::fmt::Display for ProductFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = [
            ("text", &self.text),
            ("size", &self.size),
            ("color", &self.color),
            ("category", &self.category),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| format!("{key}={v}")))
        .collect();

        if parts.is_empty() {
            write!(f, "<none>")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
