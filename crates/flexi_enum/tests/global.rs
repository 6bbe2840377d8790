//! First access to the global registry from many threads at once.
//!
//! Kept in its own binary so no other test initializes the registry first.

use std::sync::Barrier;
use std::thread;

use flexi_enum::FlexiEnumRegistry;

#[test]
fn racing_first_calls_share_one_instance() {
	let barrier = Barrier::new(8);
	let seen: Vec<usize> = thread::scope(|s| {
		let handles: Vec<_> = (0..8)
			.map(|_| {
				s.spawn(|| {
					barrier.wait();
					FlexiEnumRegistry::global() as *const FlexiEnumRegistry as usize
				})
			})
			.collect();
		handles.into_iter().map(|h| h.join().unwrap()).collect()
	});
	assert!(seen.windows(2).all(|w| w[0] == w[1]));
	assert!(std::ptr::eq(FlexiEnumRegistry::global(), FlexiEnumRegistry::global()));
}
