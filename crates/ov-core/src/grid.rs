use crate::{Image, ImageView, Rgba};

/// Random-access source of pixel colors.
///
/// `color` is only called with `x < width()` and `y < height()`.
pub trait PixelGrid {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn color(&self, x: usize, y: usize) -> Rgba;
}

impl PixelGrid for ImageView<'_, Rgba> {
    fn width(&self) -> usize {
        ImageView::width(self)
    }

    fn height(&self) -> usize {
        ImageView::height(self)
    }

    #[inline]
    fn color(&self, x: usize, y: usize) -> Rgba {
        self.row(y)[x]
    }
}

impl PixelGrid for Image<Rgba> {
    fn width(&self) -> usize {
        Image::width(self)
    }

    fn height(&self) -> usize {
        Image::height(self)
    }

    #[inline]
    fn color(&self, x: usize, y: usize) -> Rgba {
        self.data()[y * Image::width(self) + x]
    }
}

impl<G: PixelGrid + ?Sized> PixelGrid for &G {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn color(&self, x: usize, y: usize) -> Rgba {
        (**self).color(x, y)
    }
}
