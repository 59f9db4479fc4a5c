//! Typed access to the records of a [`RecordVec`].
//!
//! The vector itself is untyped. When its records are plain-old-data values of
//! a known type `T`, these helpers reinterpret them as `T` after verifying that
//! `size_of::<T>()` matches the element size.

use recvec_common::{Error, Result, verify_arg};

use crate::{
    alloc::{Global, RawAllocator},
    vector::RecordVec,
};

impl RecordVec<Global> {
    /// Creates a vector whose records are values of type `T`.
    pub fn for_type<T>(capacity_hint: usize) -> Result<RecordVec> {
        RecordVec::new(std::mem::size_of::<T>(), capacity_hint)
    }
}

impl<A: RawAllocator> RecordVec<A> {
    /// Returns the records as a slice of `T`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `size_of::<T>()` differs from the element size, or if
    /// the buffer is not sufficiently aligned for `T`.
    pub fn typed_data<T>(&self) -> Result<&[T]>
    where
        T: bytemuck::AnyBitPattern,
    {
        self.verify_type::<T>()?;
        bytemuck::try_cast_slice(self.as_bytes()).map_err(|e| Error::invalid_arg("T", e.to_string()))
    }

    /// Returns the records as a mutable slice of `T`.
    pub fn typed_data_mut<T>(&mut self) -> Result<&mut [T]>
    where
        T: bytemuck::Pod,
    {
        self.verify_type::<T>()?;
        bytemuck::try_cast_slice_mut(self.as_bytes_mut())
            .map_err(|e| Error::invalid_arg("T", e.to_string()))
    }

    /// Reads record `index` as a value of type `T`, or `None` if out of bounds.
    pub fn typed_at<T>(&self, index: usize) -> Result<Option<T>>
    where
        T: bytemuck::AnyBitPattern,
    {
        self.verify_type::<T>()?;
        Ok(self.at(index).map(bytemuck::pod_read_unaligned))
    }

    /// Appends `value` as one record.
    pub fn push_typed<T>(&mut self, value: T) -> Result<()>
    where
        T: bytemuck::NoUninit,
    {
        self.verify_type::<T>()?;
        self.push_back(Some(bytemuck::bytes_of(&value)))
    }

    /// Replaces the contents of the vector with `values`.
    pub fn assign_typed<T>(&mut self, values: &[T]) -> Result<()>
    where
        T: bytemuck::NoUninit,
    {
        self.verify_type::<T>()?;
        self.assign(Some(bytemuck::cast_slice(values)), values.len())
    }

    /// Inserts `values` before record `index`.
    pub fn insert_typed<T>(&mut self, index: usize, values: &[T]) -> Result<()>
    where
        T: bytemuck::NoUninit,
    {
        self.verify_type::<T>()?;
        self.insert(index, Some(bytemuck::cast_slice(values)), values.len())
    }

    /// Replaces the records in `[i, j)` with `values`.
    pub fn replace_typed<T>(&mut self, i: usize, j: usize, values: &[T]) -> Result<()>
    where
        T: bytemuck::NoUninit,
    {
        self.verify_type::<T>()?;
        self.replace(i, j, Some(bytemuck::cast_slice(values)), values.len())
    }

    fn verify_type<T>(&self) -> Result<()> {
        verify_arg!(T, std::mem::size_of::<T>() == self.element_size());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use recvec_common::Status;

    use super::*;

    #[test]
    fn test_typed_roundtrip() {
        let mut v = RecordVec::for_type::<i32>(25).unwrap();
        assert_eq!(v.element_size(), 4);
        v.assign_typed(&[-1i32, -1, -1]).unwrap();
        v.assign_typed(&[0i32, 1, 2, 3, 4]).unwrap();
        assert_eq!(v.typed_data::<i32>().unwrap(), &[0, 1, 2, 3, 4]);

        v.typed_data_mut::<i32>().unwrap()[4] = 40;
        assert_eq!(v.typed_at::<i32>(4).unwrap(), Some(40));
        assert_eq!(v.typed_at::<i32>(5).unwrap(), None);
    }

    #[test]
    fn test_typed_insert_replace_push() {
        let mut v = RecordVec::for_type::<u64>(4).unwrap();
        v.insert_typed(0, &[2u64, 3, 4]).unwrap();
        v.insert_typed(0, &[0u64, 1]).unwrap();
        v.push_typed(5u64).unwrap();
        assert_eq!(v.typed_data::<u64>().unwrap(), &[0, 1, 2, 3, 4, 5]);

        v.replace_typed(1, 5, &[9u64]).unwrap();
        assert_eq!(v.typed_data::<u64>().unwrap(), &[0, 9, 5]);
    }

    #[test]
    fn test_typed_size_mismatch() {
        let mut v = RecordVec::for_type::<u32>(4).unwrap();
        v.push_typed(7u32).unwrap();
        assert_eq!(
            v.typed_data::<u64>().unwrap_err().status(),
            Status::InvalidArgument
        );
        assert_eq!(
            v.push_typed(1u16).unwrap_err().status(),
            Status::InvalidArgument
        );
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_typed_data_empty() {
        let v = RecordVec::for_type::<f64>(0).unwrap();
        assert!(v.typed_data::<f64>().unwrap().is_empty());
    }
}
