use crate::config::ALLOC_CHUNK;
use crate::error::GrowError;
use crate::snake::Point;

/// Growable body storage that reserves room in fixed-size chunks.
///
/// The buffer is never empty: it starts with one segment and only grows.
/// `capacity()` reports the chunked capacity the buffer has committed to,
/// which is always at least `len()`.
#[derive(Debug, Clone)]
pub struct SegmentBuffer {
    segments: Vec<Point>,
    capacity: usize,
    chunk: usize,
    ceiling: Option<usize>,
}

impl SegmentBuffer {
    /// Creates a one-segment buffer with one chunk of capacity.
    pub fn new(start: Point) -> Result<Self, GrowError> {
        Self::build(vec![start], ALLOC_CHUNK, None)
    }

    /// Creates a buffer from explicit segments (index 0 is the head).
    ///
    /// An empty list is treated as a single segment at the origin.
    pub fn from_segments(segments: Vec<Point>) -> Result<Self, GrowError> {
        Self::build(segments, ALLOC_CHUNK, None)
    }

    /// Creates a buffer whose capacity can never exceed `ceiling` segments.
    ///
    /// Growth past the ceiling fails with [`GrowError::OutOfMemory`], the
    /// same as a failed allocation.
    pub fn with_ceiling(
        segments: Vec<Point>,
        chunk: usize,
        ceiling: usize,
    ) -> Result<Self, GrowError> {
        Self::build(segments, chunk, Some(ceiling))
    }

    fn build(
        mut segments: Vec<Point>,
        chunk: usize,
        ceiling: Option<usize>,
    ) -> Result<Self, GrowError> {
        if segments.is_empty() {
            segments.push(Point::ORIGIN);
        }

        let chunk = chunk.max(1);
        let chunks = segments.len().div_ceil(chunk);
        let mut buffer = Self {
            segments: Vec::new(),
            capacity: 0,
            chunk,
            ceiling,
        };
        buffer.reserve(chunks * chunk)?;
        buffer.segments.extend(segments);

        Ok(buffer)
    }

    /// Appends a segment that starts on top of the current tail.
    pub fn append_tail(&mut self) -> Result<(), GrowError> {
        let tail = self.tail();

        if self.segments.len() == self.capacity {
            self.reserve(self.capacity + self.chunk)?;
        }

        self.segments.push(tail);
        Ok(())
    }

    fn reserve(&mut self, capacity: usize) -> Result<(), GrowError> {
        if self.ceiling.is_some_and(|ceiling| capacity > ceiling) {
            return Err(GrowError::OutOfMemory {
                requested: capacity,
                source: None,
            });
        }

        let additional = capacity.saturating_sub(self.segments.len());
        self.segments
            .try_reserve_exact(additional)
            .map_err(|source| GrowError::OutOfMemory {
                requested: capacity,
                source: Some(source),
            })?;
        self.capacity = capacity;

        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn head(&self) -> Point {
        self.segments[0]
    }

    #[must_use]
    pub fn tail(&self) -> Point {
        self.segments[self.segments.len() - 1]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.segments
    }

    /// Splits into the head and the trailing segments.
    pub fn split_head_mut(&mut self) -> (&mut Point, &mut [Point]) {
        let (head, rest) = self.segments.split_at_mut(1);
        (&mut head[0], rest)
    }
}

#[cfg(test)]
mod tests {
    use super::SegmentBuffer;
    use crate::config::ALLOC_CHUNK;
    use crate::error::GrowError;
    use crate::snake::Point;

    #[test]
    fn new_buffer_has_one_segment_and_one_chunk() {
        let buffer = SegmentBuffer::new(Point::new(3, 4)).expect("buffer should allocate");

        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.capacity(), ALLOC_CHUNK);
        assert_eq!(buffer.head(), Point::new(3, 4));
        assert_eq!(buffer.tail(), Point::new(3, 4));
    }

    #[test]
    fn append_tail_copies_previous_tail() {
        let mut buffer = SegmentBuffer::from_segments(vec![Point::new(2, 2), Point::new(1, 2)])
            .expect("buffer should allocate");

        buffer.append_tail().expect("growth should succeed");

        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.tail(), Point::new(1, 2));
        assert_eq!(buffer.as_slice()[..2], [Point::new(2, 2), Point::new(1, 2)]);
    }

    #[test]
    fn capacity_grows_one_chunk_at_a_time() {
        let mut buffer = SegmentBuffer::with_ceiling(vec![Point::ORIGIN], 4, 64)
            .expect("buffer should allocate");
        assert_eq!(buffer.capacity(), 4);

        for _ in 0..3 {
            buffer.append_tail().expect("growth should succeed");
        }
        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.capacity(), 4);

        buffer.append_tail().expect("growth should succeed");
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.capacity(), 8);
    }

    #[test]
    fn from_segments_rounds_capacity_up_to_chunks() {
        let segments = vec![Point::ORIGIN; ALLOC_CHUNK + 1];
        let buffer = SegmentBuffer::from_segments(segments).expect("buffer should allocate");

        assert_eq!(buffer.capacity(), ALLOC_CHUNK * 2);
        assert!(buffer.capacity() >= buffer.len());
    }

    #[test]
    fn empty_segment_list_becomes_single_origin_segment() {
        let buffer = SegmentBuffer::from_segments(Vec::new()).expect("buffer should allocate");

        assert_eq!(buffer.as_slice(), &[Point::ORIGIN]);
    }

    #[test]
    fn growth_past_ceiling_reports_out_of_memory() {
        let mut buffer = SegmentBuffer::with_ceiling(vec![Point::ORIGIN, Point::ORIGIN], 2, 2)
            .expect("buffer should allocate");

        let result = buffer.append_tail();

        assert!(matches!(
            result,
            Err(GrowError::OutOfMemory { requested: 4, .. })
        ));
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.capacity(), 2);
    }
}
