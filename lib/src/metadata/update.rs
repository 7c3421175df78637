use crate::{Metadata, PhysicalResolution};
use indexmap::IndexMap;

/// A set of metadata changes applied by [`write_metadata`](crate::write_metadata)
/// and [`insert_metadata`](crate::insert_metadata).
///
/// Create one with [`MetadataUpdate::builder`], or from a [`Metadata`] read
/// from another image to copy its text entries and physical resolution.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct MetadataUpdate {
    pub(crate) clear: bool,
    pub(crate) text: IndexMap<String, String>,
    pub(crate) phys: Option<PhysicalResolution>,
}

impl MetadataUpdate {
    /// Returns a builder for [MetadataUpdate].
    ///
    /// # Examples
    /// ```
    /// use libpngmeta::{MetadataUpdate, PhysicalResolution};
    ///
    /// let update = MetadataUpdate::builder()
    ///     .clear(true)
    ///     .text("Title", "Sunset")
    ///     .phys(PhysicalResolution::from_dpi(300))
    ///     .build();
    /// assert!(update.is_clear());
    /// assert_eq!(update.text().get("Title").map(String::as_str), Some("Sunset"));
    /// ```
    #[inline]
    pub fn builder() -> MetadataUpdateBuilder {
        MetadataUpdateBuilder::default()
    }

    /// Converts [MetadataUpdate] into a [MetadataUpdateBuilder].
    #[inline]
    pub fn into_builder(self) -> MetadataUpdateBuilder {
        self.into()
    }

    /// Whether every ancillary chunk is removed before inserting new ones.
    #[inline]
    pub fn is_clear(&self) -> bool {
        self.clear
    }

    /// Text entries to insert, in insertion order.
    #[inline]
    pub fn text(&self) -> &IndexMap<String, String> {
        &self.text
    }

    /// Physical resolution to set.
    #[inline]
    pub fn phys(&self) -> Option<PhysicalResolution> {
        self.phys
    }
}

impl From<Metadata> for MetadataUpdate {
    #[inline]
    fn from(value: Metadata) -> Self {
        Self {
            clear: false,
            text: value.text,
            phys: value.phys,
        }
    }
}

/// A builder for creating [`MetadataUpdate`].
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct MetadataUpdateBuilder {
    clear: bool,
    text: IndexMap<String, String>,
    phys: Option<PhysicalResolution>,
}

impl From<MetadataUpdate> for MetadataUpdateBuilder {
    #[inline]
    fn from(value: MetadataUpdate) -> Self {
        Self {
            clear: value.clear,
            text: value.text,
            phys: value.phys,
        }
    }
}

impl MetadataUpdateBuilder {
    /// Sets whether existing ancillary chunks are removed first.
    #[inline]
    pub fn clear(&mut self, clear: bool) -> &mut Self {
        self.clear = clear;
        self
    }

    /// Adds a text entry. Setting the same keyword again replaces its text
    /// but keeps its original position.
    #[inline]
    pub fn text<K: Into<String>, V: Into<String>>(&mut self, keyword: K, text: V) -> &mut Self {
        self.text.insert(keyword.into(), text.into());
        self
    }

    /// Adds every text entry of `entries`.
    #[inline]
    pub fn texts<I, K, V>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.text
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Sets the physical resolution.
    #[inline]
    pub fn phys(&mut self, phys: Option<PhysicalResolution>) -> &mut Self {
        self.phys = phys;
        self
    }

    /// Creates a new [`MetadataUpdate`] from this builder.
    #[inline]
    pub fn build(&self) -> MetadataUpdate {
        MetadataUpdate {
            clear: self.clear,
            text: self.text.clone(),
            phys: self.phys,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;

    #[test]
    fn builder_keeps_insertion_order() {
        let update = MetadataUpdate::builder()
            .text("b", "1")
            .text("a", "2")
            .texts([("c", "3"), ("b", "4")])
            .build();
        assert_eq!(
            update.text().iter().collect::<Vec<_>>(),
            [
                (&"b".to_string(), &"4".to_string()),
                (&"a".to_string(), &"2".to_string()),
                (&"c".to_string(), &"3".to_string()),
            ]
        );
        assert!(!update.is_clear());
        assert_eq!(update.phys(), None);
    }

    #[test]
    fn from_metadata() {
        let mut metadata = Metadata::default();
        metadata.text.insert("Title".into(), "x".into());
        metadata.phys = Some(PhysicalResolution::new(1, 2, Unit::Meters));
        let update = MetadataUpdate::from(metadata);
        assert!(!update.is_clear());
        assert_eq!(update.text().len(), 1);
        assert_eq!(
            update.phys(),
            Some(PhysicalResolution::new(1, 2, Unit::Meters))
        );
    }

    #[test]
    fn into_builder_round_trip() {
        let update = MetadataUpdate::builder().clear(true).text("k", "v").build();
        assert_eq!(update.clone().into_builder().build(), update);
    }
}
