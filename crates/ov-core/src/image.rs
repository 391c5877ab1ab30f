use crate::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> Image<T> {
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, Error> {
        let expected = width.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds an image by evaluating `f(x, y)` in row-major order.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(width.saturating_mul(height));
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }

        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get_mut(y * self.width + x)
    }

}

impl<T: Clone> Image<T> {
    pub fn new_fill(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width.saturating_mul(height)],
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a, T> {
    width: usize,
    height: usize,
    stride: usize,
    data: &'a [T],
}

impl<'a, T> ImageView<'a, T> {
    pub fn from_slice(
        width: usize,
        height: usize,
        stride: usize,
        data: &'a [T],
    ) -> Result<Self, Error> {
        if stride < width {
            return Err(Error::InvalidStride);
        }

        let min_len = min_required_len(width, height, stride).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() < min_len {
            return Err(Error::SizeMismatch {
                expected: min_len,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row(&self, y: usize) -> &'a [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }
}

fn min_required_len(width: usize, height: usize, stride: usize) -> Option<usize> {
    if width == 0 || height == 0 {
        return Some(0);
    }

    let rows_before_last = height.checked_sub(1)?;
    let base = rows_before_last.checked_mul(stride)?;
    base.checked_add(width)
}

#[cfg(test)]
mod tests {
    use super::{Image, ImageView};
    use crate::Error;

    #[test]
    fn view_indexing_with_stride() {
        let data = vec![1u8, 2, 3, 99, 4, 5, 6, 88];
        let view = ImageView::from_slice(3, 2, 4, &data).expect("valid view");

        assert_eq!(view.row(0), &[1, 2, 3]);
        assert_eq!(view.row(1), &[4, 5, 6]);
    }

    #[test]
    fn last_row_may_omit_padding() {
        let data = vec![1u8, 2, 0, 3, 4];
        let view = ImageView::from_slice(2, 2, 3, &data).expect("valid view");
        assert_eq!(view.row(1), &[3, 4]);

        let short = [1u8, 2, 0, 3];
        assert_eq!(
            ImageView::from_slice(2, 2, 3, &short).unwrap_err(),
            Error::SizeMismatch {
                expected: 5,
                actual: 4
            }
        );
        assert_eq!(
            ImageView::from_slice(3, 1, 2, &data).unwrap_err(),
            Error::InvalidStride
        );
    }

    #[test]
    fn from_vec_validates_length() {
        assert!(Image::from_vec(2, 2, vec![0u8; 4]).is_ok());
        assert_eq!(
            Image::from_vec(2, 2, vec![0u8; 3]).unwrap_err(),
            Error::SizeMismatch {
                expected: 4,
                actual: 3
            }
        );

        let empty = Image::<u8>::from_vec(0, 7, Vec::new()).expect("empty image");
        assert_eq!(empty.width(), 0);
        assert!(empty.data().is_empty());
    }

    #[test]
    fn from_fn_is_row_major() {
        let mut img = Image::from_fn(3, 2, |x, y| (x, y));
        assert_eq!(img.data()[4], (1, 1));
        assert_eq!(img.data()[2], (2, 0));

        *img.get_mut(0, 1).expect("in bounds") = (9, 9);
        assert_eq!(img.data()[3], (9, 9));
        assert!(img.get_mut(3, 0).is_none());
    }
}
