use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// A target attribute that may appear as a selector in a filter query.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FilterField {
    name: String,
    #[serde(default)]
    sub_attributes: Vec<String>,
    #[serde(default)]
    is_map: bool,
}

impl FilterField {
    /// A plain field such as `name` or `controllerid`.
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_lowercase(),
            sub_attributes: vec![],
            is_map: false,
        }
    }

    /// A field that references another entity, addressed as
    /// `<field>.<sub attribute>` (e.g. `assignedds.version`).
    pub fn with_sub_attributes<I, S>(name: impl Into<String>, sub_attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into().to_lowercase(),
            sub_attributes: sub_attributes.into_iter().map(Into::into).collect(),
            is_map: false,
        }
    }

    /// A key/value field addressed as `<field>.<any key>` (e.g.
    /// `attribute.hwRevision`).
    pub fn map(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_lowercase(),
            sub_attributes: vec![],
            is_map: true,
        }
    }

    /// The lower-cased selector name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sub_attributes(&self) -> &[String] {
        &self.sub_attributes
    }

    pub fn is_map(&self) -> bool {
        self.is_map
    }
}

/// The ordered set of fields a filter query may select on.
///
/// Names are stored lower-cased and looked up case-insensitively, the same
/// way the query backend resolves selectors.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldCatalog {
    fields: IndexMap<String, FilterField>,
}

impl FieldCatalog {
    pub fn new(fields: impl IntoIterator<Item = FilterField>) -> Self {
        let mut catalog = Self::default();
        for mut field in fields {
            field.name = field.name.to_lowercase();
            catalog.fields.insert(field.name.clone(), field);
        }
        catalog
    }

    /// Builds a catalog of plain fields from their names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(names.into_iter().map(|name| FilterField::simple(name.as_ref())))
    }

    /// The fields a device (target) can be filtered on.
    pub fn target_fields() -> Self {
        Self::new([
            FilterField::simple("id"),
            FilterField::simple("name"),
            FilterField::simple("description"),
            FilterField::simple("createdat"),
            FilterField::simple("lastmodifiedat"),
            FilterField::simple("controllerid"),
            FilterField::simple("updatestatus"),
            FilterField::simple("ipaddress"),
            FilterField::map("attribute"),
            FilterField::with_sub_attributes("assignedds", ["name", "version"]),
            FilterField::with_sub_attributes("installedds", ["name", "version"]),
            FilterField::simple("tag"),
            FilterField::simple("lastcontrollerrequestat"),
            FilterField::map("metadata"),
            FilterField::with_sub_attributes("targettype", ["key", "name"]),
        ])
    }

    /// Field names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FilterField> + '_ {
        self.fields.values()
    }

    /// Looks up a top-level field, ignoring case.
    pub fn get(&self, name: &str) -> Option<&FilterField> {
        self.fields.get(name.to_lowercase().as_str())
    }

    /// Whether `name` (without any `.` suffix) has sub-entity attributes.
    pub fn has_sub_attributes(&self, name: &str) -> bool {
        let top = name.split('.').next().unwrap_or(name);
        self.get(top)
            .is_some_and(|field| !field.sub_attributes.is_empty())
    }

    /// Whether `name` is a key/value field.
    pub fn is_map(&self, name: &str) -> bool {
        self.get(name).is_some_and(FilterField::is_map)
    }

    /// Whether `path` names a complete selector: either a top-level field,
    /// or `<field>.<sub attribute>` for a field with sub-entity attributes.
    pub fn contains_path(&self, path: &str) -> bool {
        let Some((top, sub)) = path.split_once('.') else {
            return self.get(path).is_some();
        };
        match self.get(top) {
            Some(field) if !sub.is_empty() => field
                .sub_attributes
                .iter()
                .any(|attribute| attribute.eq_ignore_ascii_case(sub)),
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
