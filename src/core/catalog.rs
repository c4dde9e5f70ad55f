use super::constants::TRACKS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Track {
    pub label: &'static str,
    pub path: &'static str,
}

/// Fixed, ordered list of selectable tracks.
#[derive(Clone, Debug)]
pub struct TrackCatalog {
    tracks: Vec<Track>,
}

impl Default for TrackCatalog {
    fn default() -> Self {
        Self::new(&TRACKS)
    }
}

impl TrackCatalog {
    pub fn new(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            tracks: entries
                .iter()
                .map(|&(label, path)| Track { label, path })
                .collect(),
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tracks.iter().map(|t| t.label)
    }

    pub fn by_label(&self, label: &str) -> Option<Track> {
        self.tracks.iter().copied().find(|t| t.label == label)
    }

    /// Track loaded at startup.
    pub fn first(&self) -> Option<Track> {
        self.tracks.first().copied()
    }
}
