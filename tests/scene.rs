extern crate triangles;

use byteorder::{ByteOrder, NativeEndian};

use triangles::scene;
use triangles::video::backends::headless::{Command, HeadlessVisitor};
use triangles::video::mesh::{self, VertexAttribute};

#[test]
fn vertices() {
    assert_eq!(scene::VERTICES.len(), 18);
    assert_eq!(scene::triangles(&scene::VERTICES), 2);

    // Every vertex sits on the z = 0 plane inside clip space.
    for v in scene::VERTICES.chunks(scene::COMPONENTS) {
        assert!(v[0] >= -1.0 && v[0] <= 1.0);
        assert!(v[1] >= -1.0 && v[1] <= 1.0);
        assert_eq!(v[2], 0.0);
    }
}

#[test]
fn draw_count() {
    assert_eq!(scene::DRAW_COUNT as usize, std::mem::size_of::<usize>());
    assert!(scene::DRAW_COUNT as usize / 3 >= scene::triangles(&scene::VERTICES));
}

#[test]
fn position_attribute() {
    let attribute = VertexAttribute::position();
    assert_eq!(attribute.location, 0);
    assert_eq!(attribute.size, 3);
    assert_eq!(attribute.stride, 12);
    assert_eq!(attribute.offset, 0);
    assert!(!attribute.normalized);
}

fn uploaded(size: usize) -> Vec<u8> {
    let mut video = HeadlessVisitor::new();
    let commands = video.commands();
    let vao = mesh::build(&mut video, &scene::VERTICES, size);
    assert!(vao.is_valid());

    let commands = commands.borrow();
    assert_eq!(commands.len(), 1);
    match commands[0] {
        Command::CreateVertexArray(handle, ref bytes, attribute) => {
            assert_eq!(handle, vao);
            assert_eq!(attribute, VertexAttribute::position());
            bytes.clone()
        }
        ref v => panic!("unexpected command {:?}", v),
    }
}

#[test]
fn upload() {
    let bytes = uploaded(72);
    assert_eq!(bytes.len(), 72);
    assert_eq!(bytes, mesh::as_bytes(&scene::VERTICES));

    let mut floats = [0.0f32; 18];
    NativeEndian::read_f32_into(&bytes, &mut floats);
    assert_eq!(floats, scene::VERTICES);
}

#[test]
fn upload_partial() {
    let bytes = uploaded(12);
    assert_eq!(bytes.len(), 12);
    assert_eq!(NativeEndian::read_f32(&bytes[0..4]), -0.9);
    assert_eq!(NativeEndian::read_f32(&bytes[4..8]), -0.5);

    // Not a multiple of the attribute size, uploaded anyway.
    assert_eq!(uploaded(10).len(), 10);
}

#[test]
fn upload_oversized() {
    assert_eq!(uploaded(1024).len(), 72);
    assert!(uploaded(0).is_empty());
}
