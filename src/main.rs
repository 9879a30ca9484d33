// src/main.rs
//
// The structvis app shell. The keyboard is the whole control surface;
// every binding resolves to a clamped ParameterSet mutation, so the
// renderer below never sees a raw input value.
//
// Controls:
//   1-6            select variant (line, circle, diagonal, sineWave,
//                  checkerboard, symmetricalColor)
//   Left / Right   position
//   Up / Down      scale
//   T / G          line thickness
//   O / L          vertical offset
//   R / F          rotation
//   C / V          cell count
//   A S D W E      toggle automation (rotation, position, scale,
//                  thickness, offset)
//   - / =          rotation automation speed
//   I              shuffle the palette
//   0              reset parameters
//   P              toggle the debug readout

use nannou::prelude::*;
use rand::Rng;

use structvis::{
    animation::AutomationBank,
    config::Config,
    draw::draw_structure,
    models::{ParameterSet, StructureVariant},
    views::{compute_frame, default_palette, SLOT_COUNT},
};

struct Model {
    // live parameter state
    params: ParameterSet,
    automation: AutomationBank,

    // style
    palette: [Rgba<f32>; SLOT_COUNT],
    structure_alpha: f32,
    background_level: f32,
    base_cell_size: f32,

    random: rand::rngs::ThreadRng,
    debug_flag: bool,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    app.new_window()
        .title("structvis 0.2.1")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    let mut params = ParameterSet::default();
    params.set_cell_count(config.grid.cell_count);
    params.variant = StructureVariant::from_name(&config.grid.default_variant)
        .expect("Unknown structure variant in config");

    println!("structvis starting with variant '{}'", params.variant.name());

    Model {
        params,
        automation: AutomationBank::new(config.automation.default_speed_pct),
        palette: default_palette(config.style.structure_alpha),
        structure_alpha: config.style.structure_alpha,
        background_level: config.style.background_level,
        base_cell_size: config.grid.base_cell_size,
        random: rand::thread_rng(),
        debug_flag: false,
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    if model.automation.any_playing() {
        model.automation.advance(&mut model.params);
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let level = model.background_level;
    draw.background().color(rgb(level, level, level));

    let win = app.window_rect();
    let slots = compute_frame(
        &model.params,
        win.w(),
        win.h(),
        model.base_cell_size,
        &model.palette,
    );

    // Structures composite additively where they overlap
    let overlay = draw.color_blend(BLEND_ADD);
    for slot in &slots {
        draw_structure(&overlay, slot, win.w(), win.h());
    }

    if model.debug_flag {
        let params = &model.params;
        draw.text(&format!(
            "{}  pos {:.0}  scale {:.2}  thick {:.1}  offset {:.3}  rot {:.1}  cells {}",
            params.variant.name(),
            params.position,
            params.scale,
            params.line_thickness,
            params.y_offset,
            params.rotation,
            params.cell_count,
        ))
        .x_y(0.0, win.top() - 20.0)
        .w(win.w())
        .color(RED);
    }

    draw.to_frame(app, &frame).unwrap();
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    let params = &mut model.params;
    match key {
        // Variant selection
        Key::Key1 => params.variant = StructureVariant::Line,
        Key::Key2 => params.variant = StructureVariant::Circle,
        Key::Key3 => params.variant = StructureVariant::Diagonal,
        Key::Key4 => params.variant = StructureVariant::SineWave,
        Key::Key5 => params.variant = StructureVariant::Checkerboard,
        Key::Key6 => params.variant = StructureVariant::SymmetricalColor,

        // Parameter nudges
        Key::Left => params.set_position(params.position - 2.0),
        Key::Right => params.set_position(params.position + 2.0),
        Key::Up => params.set_scale(params.scale + 0.05),
        Key::Down => params.set_scale(params.scale - 0.05),
        Key::T => params.set_line_thickness(params.line_thickness + 0.5),
        Key::G => params.set_line_thickness(params.line_thickness - 0.5),
        Key::O => params.set_y_offset(params.y_offset + 0.001),
        Key::L => params.set_y_offset(params.y_offset - 0.001),
        Key::R => params.set_rotation(params.rotation + 5.0),
        Key::F => params.set_rotation(params.rotation - 5.0),
        Key::C => params.set_cell_count(params.cell_count.saturating_sub(5)),
        Key::V => params.set_cell_count(params.cell_count + 5),

        // Automation toggles
        Key::A => model.automation.rotation.toggle(),
        Key::S => model.automation.position.toggle(),
        Key::D => model.automation.scale.toggle(),
        Key::W => model.automation.line_thickness.toggle(),
        Key::E => model.automation.y_offset.toggle(),
        Key::Minus => {
            let state = &mut model.automation.rotation;
            state.speed_pct = (state.speed_pct - 5.0).max(0.0);
        }
        Key::Equals => {
            let state = &mut model.automation.rotation;
            state.speed_pct = (state.speed_pct + 5.0).min(100.0);
        }

        Key::I => {
            // New random palette, alpha preserved for the blend pass
            model.palette = [
                rgba(
                    model.random.gen(),
                    model.random.gen(),
                    model.random.gen(),
                    model.structure_alpha,
                ),
                rgba(
                    model.random.gen(),
                    model.random.gen(),
                    model.random.gen(),
                    model.structure_alpha,
                ),
                rgba(
                    model.random.gen(),
                    model.random.gen(),
                    model.random.gen(),
                    model.structure_alpha,
                ),
            ];
        }
        Key::Key0 => {
            params.reset();
            model.palette = default_palette(model.structure_alpha);
        }
        Key::P => {
            model.debug_flag = !model.debug_flag;
        }
        _ => (),
    }
}
