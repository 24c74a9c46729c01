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

use poly_rtti::visit::{self, ValueVisitor, ValueVisitorMut};
use poly_rtti::{polymorphic_cast_mut, registry, Property, PropertyFlags, Reflect};
use serde_json::{json, Map, Value};

// --- DUMMY REFLECTED TYPES FOR THIS TEST ---
// Three levels, with a property name reused one level down.

#[derive(Debug, Reflect)]
#[reflect(name = "scene::Node")]
struct Node {
    #[reflect(property)]
    num: i32,
    #[reflect(property(flags(DONT_SERIALIZE)))]
    scratch: &'static str,
}

#[derive(Debug, Reflect)]
#[reflect(name = "scene::Sprite")]
struct Sprite {
    #[reflect(base)]
    node: Node,
    #[reflect(property(flags(bits = 0b1000)))]
    num: f32,
    #[reflect(property(rename = "texture", flags(HIDDEN, READ_ONLY)))]
    texture_path: String,
}

#[derive(Debug, Reflect)]
#[reflect(name = "scene::AnimatedSprite")]
struct AnimatedSprite {
    #[reflect(base)]
    sprite: Sprite,
    #[reflect(property)]
    frame: u32,
}

fn animated() -> AnimatedSprite {
    AnimatedSprite {
        sprite: Sprite {
            node: Node {
                num: -8,
                scratch: "8",
            },
            num: 1.5,
            texture_path: "hero.png".to_owned(),
        },
        frame: 3,
    }
}

/// A minimal serializer built on the value visitor: writes every property
/// not flagged `DONT_SERIALIZE`, base first, later levels overwriting reused names.
#[derive(Default)]
struct JsonWriter {
    fields: Map<String, Value>,
    order: Vec<String>,
}

impl ValueVisitor for JsonWriter {
    fn visit<O: Reflect>(&mut self, property: &'static Property<O>, owner: &O) {
        if !property.flags().is_serialized() {
            return;
        }
        let value = if let Some(v) = property.get_as::<i32>(owner) {
            json!(v)
        } else if let Some(v) = property.get_as::<f32>(owner) {
            json!(v)
        } else if let Some(v) = property.get_as::<u32>(owner) {
            json!(v)
        } else if let Some(v) = property.get_as::<String>(owner) {
            json!(v)
        } else {
            Value::Null
        };
        self.order.push(format!("{}.{}", O::NAME, property.name()));
        self.fields.insert(property.name().to_owned(), value);
    }
}

/// Zeroes every integer property it can reach.
struct ResetIntegers;

impl ValueVisitorMut for ResetIntegers {
    fn visit<O: Reflect>(&mut self, property: &'static Property<O>, owner: &mut O) {
        if let Some(v) = property.get_as_mut::<i32>(owner) {
            *v = 0;
        } else if let Some(v) = property.get_as_mut::<u32>(owner) {
            *v = 0;
        }
    }
}

// --- TESTS ---

#[test]
fn test_chain_walk_from_leaf() {
    let names: Vec<_> = AnimatedSprite::type_node()
        .ancestors()
        .map(|node| node.name())
        .collect();
    assert_eq!(names, ["scene::AnimatedSprite", "scene::Sprite", "scene::Node"]);
    assert_eq!(AnimatedSprite::type_node().depth(), 2);
}

#[test]
fn test_reused_name_resolves_per_level() {
    // Own-level lookup on Sprite finds its own `num`, which is an f32.
    assert!(visit::find_typed_property::<Sprite, f32>("num").is_some());
    assert!(visit::find_typed_property::<Sprite, i32>("num").is_none());
    assert!(visit::find_typed_property::<Node, i32>("num").is_some());

    // Owner-agnostic recursive lookup: the most derived declaration wins.
    let (owner, info) = AnimatedSprite::type_node()
        .find_property_recursive("num")
        .expect("num is declared on the chain");
    assert_eq!(owner.name(), "scene::Sprite");
    assert_eq!(info.flags(), PropertyFlags::from_bits(0b1000));
}

#[test]
fn test_recursive_metadata_order_and_flags() {
    let mut rows = Vec::new();
    AnimatedSprite::type_node().for_each_property_recursive(|node, info| {
        rows.push((node.name(), info.name(), info.flags().bits()));
    });

    assert_eq!(
        rows,
        [
            ("scene::Node", "num", 0),
            ("scene::Node", "scratch", PropertyFlags::DONT_SERIALIZE.bits()),
            ("scene::Sprite", "num", 0b1000),
            (
                "scene::Sprite",
                "texture",
                (PropertyFlags::HIDDEN | PropertyFlags::READ_ONLY).bits()
            ),
            ("scene::AnimatedSprite", "frame", 0),
        ]
    );
}

#[test]
fn test_value_visitor_serializes_base_first() {
    // --- 1. ARRANGE ---
    let sprite = animated();
    let mut writer = JsonWriter::default();

    // --- 2. ACT ---
    visit::for_each_property_value(&sprite, &mut writer);

    // --- 3. ASSERT ---
    assert_eq!(
        writer.order,
        [
            "scene::Node.num",
            "scene::Sprite.num",
            "scene::Sprite.texture",
            "scene::AnimatedSprite.frame",
        ]
    );
    assert_eq!(
        Value::Object(writer.fields),
        json!({ "num": 1.5, "texture": "hero.png", "frame": 3 })
    );
}

#[test]
fn test_mutable_value_visitor_reaches_every_level() {
    let mut sprite = animated();
    visit::for_each_property_value_mut(&mut sprite, &mut ResetIntegers);
    assert_eq!(sprite.sprite.node.num, 0);
    assert_eq!(sprite.frame, 0);
    assert_eq!(sprite.sprite.num, 1.5);
}

#[test]
fn test_read_only_flag_blocks_reflected_writes() {
    let mut sprite = animated();
    let texture = visit::find_typed_property::<Sprite, String>("texture")
        .expect("renamed property is found by its reflected name");

    let sprite_level = polymorphic_cast_mut::<Sprite>(&mut sprite).expect("Sprite is an ancestor");
    assert!(texture.set(sprite_level, "other.png".to_owned()).is_err());
    assert_eq!(texture.get(sprite_level), "hero.png");
    assert!(visit::find_property::<Sprite>("texture_path").is_none());
}

#[test]
fn test_registry_knows_the_chain() {
    let node = registry::find_type("scene::Sprite").expect("derived types are registered");
    assert!(std::ptr::eq(node, Sprite::type_node()));

    let mut under_node: Vec<_> = registry::subtypes_of(Node::type_node())
        .map(|n| n.name())
        .collect();
    under_node.sort_unstable();
    assert_eq!(
        under_node,
        ["scene::AnimatedSprite", "scene::Node", "scene::Sprite"]
    );
}

#[test]
fn test_description_as_json() -> anyhow::Result<()> {
    let description = serde_json::to_value(Sprite::type_node().describe())?;

    assert_eq!(description["name"], "scene::Sprite");
    assert_eq!(description["base"], "scene::Node");
    assert_eq!(description["chain"], json!(["scene::Sprite", "scene::Node"]));
    assert_eq!(description["properties"][1]["name"], "texture");
    assert_eq!(
        description["properties"][1]["hash"],
        poly_rtti::hash::fnv1a_str("texture")
    );
    Ok(())
}
