/// Prefix-sum backed window over the render sequence. Building is
/// O(count) and happens only when the sequence itself changes; each
/// `range` query is a pair of binary searches plus the emitted window,
/// never a scan of the whole sequence.
#[derive(Clone, Debug)]
pub struct Window {
  offsets: Vec<u32>,
}

impl Window {
  pub fn new(count: usize, size_of: impl Fn(usize) -> u32) -> Self {
    let mut offsets = Vec::with_capacity(count + 1);

    offsets.push(0);

    for index in 0..count {
      let last = offsets[index];
      offsets.push(last + size_of(index));
    }

    Self { offsets }
  }

  pub fn offset_of(&self, index: usize) -> u32 {
    self
      .offsets
      .get(index)
      .copied()
      .unwrap_or_else(|| self.total_size())
  }

  /// The smallest contiguous index range whose rows cover
  /// `[scroll_offset, scroll_offset + viewport)`, expanded by `overscan`
  /// rows on each side and clamped to the sequence. A scroll offset past
  /// the end clamps to the last valid window instead of coming back
  /// empty.
  pub fn range(
    &self,
    scroll_offset: u32,
    viewport: u32,
    overscan: usize,
  ) -> Vec<WindowItem> {
    let count = self.offsets.len() - 1;

    if count == 0 {
      return Vec::new();
    }

    let total = self.total_size();
    let scroll = scroll_offset.min(total.saturating_sub(viewport));
    let end = scroll.saturating_add(viewport);

    // first row whose bottom edge is below the scroll top
    let lo = self.offsets[1..].partition_point(|&bottom| bottom <= scroll);

    // first row starting at or past the viewport bottom
    let hi = self.offsets[..count].partition_point(|&top| top < end);

    let lo = lo.saturating_sub(overscan);
    let hi = hi.saturating_add(overscan).min(count);

    (lo..hi)
      .map(|index| WindowItem {
        index,
        offset: self.offsets[index],
        size: self.offsets[index + 1] - self.offsets[index],
      })
      .collect()
  }

  pub fn size_of(&self, index: usize) -> u32 {
    match (self.offsets.get(index), self.offsets.get(index + 1)) {
      (Some(top), Some(bottom)) => bottom - top,
      _ => 0,
    }
  }

  pub fn total_size(&self) -> u32 {
    self.offsets.last().copied().unwrap_or(0)
  }
}

/// One materialized row: enough for the host to absolutely position it
/// without reflowing its siblings.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WindowItem {
  pub index: usize,
  pub offset: u32,
  pub size: u32,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn uniform(count: usize, size: u32) -> Window {
    Window::new(count, |_| size)
  }

  #[test]
  fn thousand_rows_viewport_covers_ten_plus_overscan() {
    let window = uniform(1000, 40);

    let items = window.range(0, 400, 5);

    // rows 0-9 fill the viewport, overscan extends to 14, clamped at
    // the start
    assert_eq!(items.first().unwrap().index, 0);
    assert_eq!(items.last().unwrap().index, 14);
    assert_eq!(items.len(), 15);
  }

  #[test]
  fn materialized_rows_tile_the_viewport_without_gaps_or_overlap() {
    let window = uniform(100, 40);

    let items = window.range(130, 400, 0);

    assert!(items.first().unwrap().offset <= 130);
    assert!(items.last().unwrap().offset + items.last().unwrap().size >= 530);

    for pair in items.windows(2) {
      assert_eq!(pair[0].offset + pair[0].size, pair[1].offset);
    }
  }

  #[test]
  fn scroll_past_the_end_clamps_to_the_last_window() {
    let window = uniform(1000, 40);

    let items = window.range(u32::MAX, 400, 0);

    assert_eq!(items.first().unwrap().index, 990);
    assert_eq!(items.last().unwrap().index, 999);
  }

  #[test]
  fn heterogeneous_sizes_accumulate_into_absolute_offsets() {
    // header, option, option, header, option
    let sizes = [35, 40, 40, 35, 40];

    let window = Window::new(sizes.len(), |index| sizes[index]);

    assert_eq!(window.total_size(), 190);
    assert_eq!(window.offset_of(0), 0);
    assert_eq!(window.offset_of(1), 35);
    assert_eq!(window.offset_of(3), 115);
    assert_eq!(window.size_of(3), 35);
  }

  #[test]
  fn viewport_larger_than_content_materializes_everything() {
    let window = uniform(3, 40);

    let items = window.range(0, 400, 5);

    assert_eq!(items.len(), 3);
  }

  #[test]
  fn empty_sequence_yields_an_empty_window() {
    let window = uniform(0, 40);

    assert_eq!(window.total_size(), 0);
    assert!(window.range(0, 400, 5).is_empty());
  }

  #[test]
  fn rows_fully_above_the_scroll_top_are_excluded_before_overscan() {
    let window = uniform(100, 40);

    // row 0 ends exactly at the scroll top
    let items = window.range(40, 400, 0);

    assert_eq!(items.first().unwrap().index, 1);
    assert_eq!(items.last().unwrap().index, 10);
  }

  #[test]
  fn out_of_range_accessors_degrade_instead_of_panicking() {
    let window = uniform(3, 40);

    assert_eq!(window.offset_of(99), 120);
    assert_eq!(window.size_of(99), 0);
  }
}
