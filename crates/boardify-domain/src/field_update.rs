use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Represents a field update operation for partial updates
///
/// This type provides a clear, three-state pattern for updating optional fields:
/// - `NoChange`: Field is left out of the patch and keeps its existing value
/// - `Set(value)`: Field is sent with the provided value
/// - `Clear`: Field is sent as `null`
///
/// Pair it with `#[serde(default, skip_serializing_if = "FieldUpdate::is_no_change")]`
/// so that `NoChange` never reaches the wire.
///
/// # Example
///
/// ```
/// use boardify_domain::FieldUpdate;
///
/// let untouched: FieldUpdate<String> = FieldUpdate::default();
/// let cleared: FieldUpdate<String> = FieldUpdate::Clear;
/// assert!(untouched.is_no_change());
/// assert!(!cleared.is_no_change());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Do not modify this field (keep existing value)
    NoChange,
    /// Set the field to the provided value
    Set(T),
    /// Clear the field (set to None)
    Clear,
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::NoChange
    }
}

impl<T> FieldUpdate<T> {
    /// Apply this update to an optional field
    ///
    /// # Example
    ///
    /// ```
    /// use boardify_domain::FieldUpdate;
    ///
    /// let mut field = Some("old value".to_string());
    /// let update = FieldUpdate::Set("new value".to_string());
    /// update.apply_to(&mut field);
    /// assert_eq!(field, Some("new value".to_string()));
    ///
    /// let clear = FieldUpdate::Clear;
    /// clear.apply_to(&mut field);
    /// assert_eq!(field, None);
    /// ```
    pub fn apply_to(self, field: &mut Option<T>) {
        match self {
            FieldUpdate::NoChange => {}
            FieldUpdate::Set(value) => *field = Some(value),
            FieldUpdate::Clear => *field = None,
        }
    }

    pub fn is_no_change(&self) -> bool {
        matches!(self, FieldUpdate::NoChange)
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    /// Convert Option<T> to FieldUpdate<T>
    /// - Some(value) becomes Set(value)
    /// - None becomes Clear
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Clear,
        }
    }
}

impl<T: Serialize> Serialize for FieldUpdate<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldUpdate::Set(value) => serializer.serialize_some(value),
            FieldUpdate::Clear | FieldUpdate::NoChange => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldUpdate<T> {
    /// A present key maps through `From<Option<T>>`; an absent key needs
    /// `#[serde(default)]` on the field to become `NoChange`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(FieldUpdate::from)
    }
}
