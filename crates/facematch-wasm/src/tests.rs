//! Browser tests for the canvas front end

#[cfg(test)]
mod tests {
    use crate::assets::{resource_url, ImageStore};
    use crate::layout::ScreenLayout;
    use crate::render::Tinter;
    use crate::theme::{Color, Theme};
    use crate::FaceMatchGame;
    use facematch_core::{assets, RegionId, TARGET_TILE};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_theme_by_name() {
        assert_eq!(Theme::by_name("bold").box_alpha, 0.8);
        assert_eq!(Theme::by_name("classic").box_alpha, 0.5);
        assert_eq!(Theme::by_name("unknown").box_stroke, Color::new(0, 0, 0));
    }

    #[wasm_bindgen_test]
    fn test_color_css() {
        let color = Color::new(255, 128, 0);
        assert_eq!(color.as_css(), "rgb(255, 128, 0)");
        assert_eq!(color.as_css_alpha(0.5), "rgba(255, 128, 0, 0.5)");
    }

    #[wasm_bindgen_test]
    fn test_resource_urls() {
        assert_eq!(resource_url(assets::QUESTION_MARK), "resource/question_mark.svg");
        assert_eq!(resource_url(assets::SHAPES[2]), "resource/shape_rhombus.svg");
    }

    #[wasm_bindgen_test]
    fn test_image_store_requests_everything() {
        let store = ImageStore::load().expect("image elements");
        assert_eq!(store.total(), assets::ALL.len());
        assert!(store.loaded() <= store.total());
    }

    #[wasm_bindgen_test]
    fn test_tinter_creates_canvas() {
        assert!(Tinter::new().is_ok());
    }

    #[wasm_bindgen_test]
    fn test_layout_at_small_size() {
        let (width, height) = ScreenLayout::fit_canvas(640.0, 640.0);
        let layout = ScreenLayout::compute(width, height, 12);
        let (x, y) = layout.slot_rect(RegionId::Mystery, TARGET_TILE).center();
        assert_eq!(layout.hit_test(x, y), Some((RegionId::Mystery, TARGET_TILE)));
    }

    /// A game on a fresh canvas element with the given id
    fn game_on_canvas(id: &str, config_json: &str) -> FaceMatchGame {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document");
        let canvas = document
            .create_element("canvas")
            .expect("canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("canvas element");
        canvas.set_id(id);
        document.body().expect("body").append_child(&canvas).expect("append");
        FaceMatchGame::new(id, Some(config_json.to_string())).expect("game")
    }

    #[wasm_bindgen_test]
    fn test_level_round_trips_through_load_level() {
        let game = game_on_canvas("level-base", r#"{"start_level": 3, "seed": 5}"#);
        assert_eq!(game.level(), 3);
        assert_eq!(game.display_level(), 4);

        assert_eq!(game.load_level(game.level() as i32), 3);
        assert_eq!(game.level(), 3);

        assert_eq!(game.load_level(-1), 6);
        assert_eq!(game.display_level(), 7);
    }
}
