/// Read access to a row-major, interleaved, possibly strided sample grid.
///
/// A row holds `width() * channels()` samples; `stride()` counts samples
/// between the starts of consecutive rows and may exceed the row length.
pub trait ImageView {
    type Sample: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn channels(&self) -> usize;
    fn stride(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Sample];

    /// Samples per row, excluding stride padding.
    #[inline]
    fn row_len(&self) -> usize {
        self.width() * self.channels()
    }

    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    fn is_contiguous(&self) -> bool {
        self.stride() == self.row_len()
    }

    fn as_slice(&self) -> Option<&[Self::Sample]> {
        None
    }
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Sample];
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Sample];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }
}
