use std::sync::atomic::{AtomicU64, Ordering};

/// Tag issued for every trigger. Only the latest one may touch the results container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);
impl Generation {
	pub fn get(self) -> u64 {
		self.0
	}
}

#[derive(Debug, Default)]
pub struct Generations {
	latest: AtomicU64,
}
impl Generations {
	pub fn issue(&self) -> Generation {
		Generation(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
	}

	pub fn latest(&self) -> Option<Generation> {
		match self.latest.load(Ordering::SeqCst) {
			0 => None,
			value => Some(Generation(value)),
		}
	}

	pub fn is_current(&self, generation: Generation) -> bool {
		self.latest.load(Ordering::SeqCst) == generation.0
	}
}
