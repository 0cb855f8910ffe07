//! App configuration: exit gesture and screen orientation.
//!
//! Settings are read by the dispatch and render paths on every call, so a
//! change made on the settings screen applies to the very next event.
//! Persistence is a versioned TSV file, present only with the `std`
//! feature (simulators, host tests); firmware wires its own storage.

/// Which back-key gesture leaves the app.
///
/// The opposite gesture stays a navigation action and transmits the IR
/// back command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitMode {
    /// A short back press exits; holding back transmits.
    #[default]
    Press,
    /// Holding back exits; a short back press transmits.
    Hold,
}

impl ExitMode {
    /// All exit modes in cycle order.
    pub const ALL: [Self; 2] = [Self::Press, Self::Hold];

    /// Display label for the settings row.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Press => "Press",
            Self::Hold => "Hold",
        }
    }

    /// Footer hint shown on the navigation screen.
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Press => "Press to exit",
            Self::Hold => "Hold to exit",
        }
    }

    /// Get index in ALL array.
    pub const fn index(self) -> usize {
        match self {
            Self::Press => 0,
            Self::Hold => 1,
        }
    }

    /// Create from index.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Press),
            1 => Some(Self::Hold),
            _ => None,
        }
    }

    /// The other mode.
    pub const fn cycled(self) -> Self {
        match self {
            Self::Press => Self::Hold,
            Self::Hold => Self::Press,
        }
    }
}

/// Screen orientation; selects the navigation layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// 64x128, pad stacked under the header.
    #[default]
    Vertical,
    /// 128x64, pad on the left, header and back on the right.
    Horizontal,
}

impl Orientation {
    /// All orientations in cycle order.
    pub const ALL: [Self; 2] = [Self::Vertical, Self::Horizontal];

    /// Display label for the settings row.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vertical => "Vertical",
            Self::Horizontal => "Horizontal",
        }
    }

    /// Get index in ALL array.
    pub const fn index(self) -> usize {
        match self {
            Self::Vertical => 0,
            Self::Horizontal => 1,
        }
    }

    /// Create from index.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Vertical),
            1 => Some(Self::Horizontal),
            _ => None,
        }
    }

    /// The other orientation.
    pub const fn cycled(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }
}

/// User-visible remote configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RemoteSettings {
    pub exit_mode: ExitMode,
    pub orientation: Orientation,
}

impl RemoteSettings {
    /// Persisted settings, or defaults when nothing valid is stored.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    #[cfg(feature = "std")]
    fn settings_file_path() -> &'static str {
        if cfg!(target_os = "espidf") {
            "/int/.irdeck/settings.tsv"
        } else {
            "target/.irdeck-settings.tsv"
        }
    }

    /// Load persisted settings. `None` when the file is missing or not a
    /// format this build understands.
    #[cfg(feature = "std")]
    pub fn load() -> Option<Self> {
        let raw = std::fs::read_to_string(Self::settings_file_path()).ok()?;
        let mut lines = raw.lines();
        if lines.next()? != "v1" {
            log::warn!("settings file has unknown version, using defaults");
            return None;
        }
        let line = lines.next()?;
        let mut fields = line.split('\t');
        let exit_mode = ExitMode::from_index(fields.next()?.parse::<usize>().ok()?)?;
        let orientation = Orientation::from_index(fields.next()?.parse::<usize>().ok()?)?;
        Some(Self {
            exit_mode,
            orientation,
        })
    }

    #[cfg(not(feature = "std"))]
    pub fn load() -> Option<Self> {
        None
    }

    /// Persist the current settings. Write failures are not surfaced; the
    /// device keeps running on the in-memory values.
    #[cfg(feature = "std")]
    pub fn persist(self) {
        let path = Self::settings_file_path();
        if let Some(parent) = std::path::Path::new(path).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let out = std::format!(
            "v1\n{}\t{}\n",
            self.exit_mode.index(),
            self.orientation.index()
        );
        let _ = std::fs::write(path, out);
    }

    #[cfg(not(feature = "std"))]
    pub fn persist(self) {}
}
