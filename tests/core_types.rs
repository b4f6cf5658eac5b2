use pixelfind::{OwnedPixels, Pixel, PixelBuffer, PixelFindError, Rgba32};

#[test]
fn pixel_buffer_rejects_length_mismatch() {
    let data = [Rgba32::TRANSPARENT; 5];

    let err = PixelBuffer::new(&data, 2, 2).err().unwrap();
    assert_eq!(
        err,
        PixelFindError::SizeMismatch {
            width: 2,
            height: 2,
            len: 5,
        }
    );

    let err = PixelBuffer::new(&data[..3], 2, 2).err().unwrap();
    assert_eq!(
        err,
        PixelFindError::SizeMismatch {
            width: 2,
            height: 2,
            len: 3,
        }
    );
}

#[test]
fn pixel_buffer_rejects_overflowing_dimensions() {
    let data = [Rgba32::TRANSPARENT; 1];
    let err = PixelBuffer::new(&data, usize::MAX, 2).err().unwrap();
    assert!(matches!(err, PixelFindError::SizeMismatch { .. }));
    assert!(!err.is_geometry());
}

#[test]
fn zero_sized_buffers_are_legal() {
    let data: [Rgba32; 0] = [];
    let view = PixelBuffer::new(&data, 0, 7).unwrap();
    assert_eq!(view.width(), 0);
    assert_eq!(view.height(), 7);
    assert_eq!(view.len(), 0);
    assert!(view.is_empty());
    assert!(view.get(0, 0).is_none());
}

#[test]
fn pixel_buffer_indexes_row_major() {
    let data: Vec<Rgba32> = (0u8..6).map(|v| Rgba32::new(v, 0, 0, 255)).collect();
    let view = PixelBuffer::new(&data, 3, 2).unwrap();

    assert_eq!(view.get(2, 0).map(Pixel::r), Some(2));
    assert_eq!(view.get(0, 1).map(Pixel::r), Some(3));
    assert!(view.get(3, 0).is_none());
    assert!(view.get(0, 2).is_none());

    let row: Vec<u8> = view.row(1).unwrap().iter().map(Pixel::r).collect();
    assert_eq!(row, vec![3, 4, 5]);
    assert!(view.row(2).is_none());
    assert_eq!(view.as_slice().as_ptr(), data.as_ptr());
}

#[test]
fn owned_pixels_round_trip_through_view() {
    let data = vec![[1u8, 2, 3, 4]; 6];
    let owned = OwnedPixels::new(data.clone(), 2, 3).unwrap();
    let view = owned.view();
    assert_eq!(view.width(), 2);
    assert_eq!(view.height(), 3);

    let copy = OwnedPixels::from_view(view);
    assert_eq!(copy, owned);
    assert_eq!(copy.into_vec(), data);

    let err = OwnedPixels::new(vec![[0u8; 4]; 5], 2, 3).err().unwrap();
    assert_eq!(
        err,
        PixelFindError::SizeMismatch {
            width: 2,
            height: 3,
            len: 5,
        }
    );
}

#[test]
fn error_messages_name_the_geometry() {
    let err = PixelFindError::NeedleLargerThanHaystack {
        needle_width: 4,
        needle_height: 4,
        haystack_width: 3,
        haystack_height: 8,
    };
    assert!(err.is_geometry());
    assert_eq!(
        err.to_string(),
        "haystack 3x8 must be at least as large as needle 4x4"
    );
}
