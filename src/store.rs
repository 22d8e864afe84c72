use crate::config::{ParamKey, ParamValue, TrailConfig};
use smallvec::SmallVec;

/// Destination for inline style writes. In the browser this is the root
/// element's `style` declaration.
pub trait StyleSink {
    fn set_property(&mut self, name: &str, value: &str);
}

/// What a single `update` wrote.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Applied {
    pub keys: SmallVec<[ParamKey; 2]>,
    /// A partner entry changed behind the panel's back; bound displays are stale.
    pub refresh_display: bool,
}

impl Applied {
    #[inline]
    pub fn partner(&self) -> Option<ParamKey> {
        self.keys.get(1).copied()
    }
}

/// Owns the configuration and keeps the sink in step with it.
pub struct ConfigStore<S: StyleSink> {
    config: TrailConfig,
    sink: S,
    linked: bool,
}

impl<S: StyleSink> ConfigStore<S> {
    /// Take ownership of `config` and write every entry to `sink`, so the
    /// inline style no longer depends on stylesheet defaults.
    pub fn load(config: TrailConfig, sink: S) -> Self {
        let mut store = ConfigStore {
            config,
            sink,
            linked: false,
        };
        for (key, value) in store.config.entries().collect::<Vec<_>>() {
            store.sink.set_property(key.css_name(), &value.to_css());
        }
        log::info!("[store] baseline applied for {} entries", ParamKey::ALL.len());
        store
    }

    /// Apply a value for `key`, and for `link` too when linking is enabled.
    ///
    /// Values are trusted; the panel constrains them before they arrive.
    pub fn update(&mut self, key: ParamKey, link: Option<ParamKey>, value: ParamValue) -> Applied {
        let css = value.to_css();
        let mut applied = Applied::default();

        self.sink.set_property(key.css_name(), &css);
        applied.keys.push(key);

        match link {
            Some(partner) if self.linked && partner != key => {
                self.config.set(partner, value.clone());
                self.sink.set_property(partner.css_name(), &css);
                applied.keys.push(partner);
                applied.refresh_display = true;
            }
            _ => {}
        }

        self.config.set(key, value);
        log::debug!("[store] {:?} <- {}", applied.keys, css);
        applied
    }

    #[inline]
    pub fn set_linked(&mut self, linked: bool) {
        self.linked = linked;
        log::info!("[store] linked={}", linked);
    }

    #[inline]
    pub fn is_linked(&self) -> bool {
        self.linked
    }

    #[inline]
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }
}
