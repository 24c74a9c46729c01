// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Barrier;
use std::thread;

use poly_rtti::{polymorphic_cast, visit, Reflect, TypeNode};

// --- DUMMY REFLECTED TYPES FOR THIS TEST ---
// `Emitter` and `Particle` are only ever touched by the race test, so their
// nodes are still unbuilt when the race starts. `Camera` and `Transform` serve
// the read test.

#[derive(Debug, Reflect)]
struct Emitter {
    #[reflect(property)]
    rate: f32,
}

#[derive(Debug, Reflect)]
struct Particle {
    #[reflect(base)]
    emitter: Emitter,
    #[reflect(property)]
    lifetime: f32,
}

#[derive(Debug, Reflect)]
struct Transform {
    #[reflect(property)]
    x: f32,
}

#[derive(Debug, Reflect)]
struct Camera {
    #[reflect(base)]
    transform: Transform,
    #[reflect(property)]
    fov: f32,
}

const THREADS: usize = 16;

#[test]
fn test_first_touch_race_yields_one_node() {
    // --- 1. ARRANGE ---
    let barrier = Barrier::new(THREADS);

    // --- 2. ACT ---
    // Every thread waits at the barrier, then asks for the leaf node first so
    // that the base node is also built from inside the race.
    let addresses: Vec<(usize, usize)> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    let particle = Particle::type_node();
                    let emitter = Emitter::type_node();
                    (
                        particle as *const TypeNode as usize,
                        emitter as *const TypeNode as usize,
                    )
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("thread panicked"))
            .collect()
    });

    // --- 3. ASSERT ---
    let (particle, emitter) = addresses[0];
    assert!(
        addresses.iter().all(|&pair| pair == (particle, emitter)),
        "All threads must observe the same nodes"
    );
    assert_eq!(
        Particle::type_node().base().map(|n| n as *const TypeNode as usize),
        Some(emitter),
        "The base link must point at the shared base node"
    );
}

#[test]
fn test_concurrent_reads_need_no_locking() {
    let cameras: Vec<Camera> = (0..THREADS)
        .map(|i| Camera {
            transform: Transform { x: i as f32 },
            fov: 60.0,
        })
        .collect();

    thread::scope(|scope| {
        for camera in &cameras {
            scope.spawn(move || {
                let fov = visit::find_typed_property::<Camera, f32>("fov").expect("fov");
                let x = visit::find_typed_property::<Transform, f32>("x").expect("x");
                let transform = polymorphic_cast::<Transform>(camera).expect("upcast");
                assert_eq!(*fov.get(camera), 60.0);
                assert_eq!(*x.get(transform), camera.transform.x);
            });
        }
    });
}
