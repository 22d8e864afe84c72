use fnv::FnvHashMap;
use glam::DVec2;

/// Where a transient trail element sits: the pointer position shifted by
/// half the frame so the element is centered on the frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailSpot {
    pub offset: DVec2,
}

impl TrailSpot {
    /// `client_x`/`client_y` are already truncated to whole pixels.
    #[inline]
    pub fn at(client_x: i32, client_y: i32, frame: DVec2) -> Self {
        let pointer = DVec2::new(client_x as f64, client_y as f64);
        TrailSpot {
            offset: pointer - frame / 2.0,
        }
    }

    /// Value for the element's `style` attribute.
    pub fn style_attr(&self) -> String {
        format!("--x: {}px; --y: {}px", self.offset.x, self.offset.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TrailId(u64);

/// A trail element that can take itself out of the document.
pub trait TrailNode {
    fn detach(&self);
}

/// Owns the trail elements currently in the document.
///
/// A node is held from `spawn` until its first `complete`, which detaches it;
/// later completions for the same id do nothing.
pub struct TrailLedger<N: TrailNode> {
    next: u64,
    live: FnvHashMap<TrailId, N>,
}

impl<N: TrailNode> Default for TrailLedger<N> {
    fn default() -> Self {
        TrailLedger {
            next: 0,
            live: FnvHashMap::default(),
        }
    }
}

impl<N: TrailNode> TrailLedger<N> {
    pub fn spawn(&mut self, node: N) -> TrailId {
        let id = TrailId(self.next);
        self.next += 1;
        self.live.insert(id, node);
        id
    }

    /// Detach the node for `id`. Returns true only the first time.
    pub fn complete(&mut self, id: TrailId) -> bool {
        match self.live.remove(&id) {
            Some(node) => {
                node.detach();
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn live(&self) -> usize {
        self.live.len()
    }
}
