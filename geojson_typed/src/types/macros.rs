/// Implements `TryFrom<Vec<T>>` and `TryFrom<[T; N]>` for a validated container,
/// converting every element into the item type first and then running the
/// container's own `checked` constructor. Errors are reported at the root path.
#[macro_export]
macro_rules! impl_try_from_array {
	($($t:ty,$i:ty),*) => {$(
		impl<T> TryFrom<Vec<T>> for $t
		where
			$i: TryFrom<T>,
			$crate::GeoJsonError: From<<$i as TryFrom<T>>::Error>,
		{
			type Error = $crate::GeoJsonError;

			fn try_from(value: Vec<T>) -> $crate::Result<Self> {
				let items = value
					.into_iter()
					.map(|v| <$i>::try_from(v).map_err($crate::GeoJsonError::from))
					.collect::<$crate::Result<Vec<$i>>>()?;
				Self::checked(items)
			}
		}

		impl<T, const N: usize> TryFrom<[T; N]> for $t
		where
			$i: TryFrom<T>,
			$crate::GeoJsonError: From<<$i as TryFrom<T>>::Error>,
		{
			type Error = $crate::GeoJsonError;

			fn try_from(value: [T; N]) -> $crate::Result<Self> {
				Self::try_from(Vec::from(value))
			}
		}
	)*}
}
