//! 検出結果オーバーレイ描画コンポーネント
//!
//! 表示中の画像要素と同じピクセルサイズのキャンバスに画像を敷き、
//! クランプ済みボックスとラベル帯を重ね描きする。描画は画像の
//! デコード完了後にのみ行い、結果が差し替わるたびに再実行する

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use gloo::console;
use ppe_vision_common::{clamp_box, label_layout, Detection, OverlayStyle};

#[component]
pub fn OverlayCanvas(
    preview_url: Signal<Option<String>>,
    detections: Signal<Vec<Detection>>,
) -> impl IntoView {
    let img_ref = NodeRef::<leptos::html::Img>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    // 結果または画像が差し替わるたびに再描画を仕掛ける。
    // これにより前回アップロードのオーバーレイが残らない
    Effect::new(move |_| {
        let dets = detections.get();
        let _ = preview_url.get();

        let (Some(img), Some(canvas)) = (img_ref.get(), canvas_ref.get()) else {
            return;
        };
        schedule_draw(&img, &canvas, dets);
    });

    view! {
        <div class="overlay-stack">
            <img
                node_ref=img_ref
                src=move || preview_url.get().unwrap_or_default()
                alt="検出対象"
            />
            <canvas node_ref=canvas_ref class="overlay-canvas" />
        </div>
    }
}

/// デコード完了済みなら即描画、未完了ならonloadに繰り延べる
fn schedule_draw(img: &HtmlImageElement, canvas: &HtmlCanvasElement, detections: Vec<Detection>) {
    if img.complete() {
        draw_detections(img, canvas, &detections);
        return;
    }

    let img_for_draw = img.clone();
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        draw_detections(&img_for_draw, &canvas, &detections);
    }) as Box<dyn FnMut(_)>);

    img.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
}

/// 画像とボックスをキャンバスへ描画する
///
/// キャンバスのサイズは表示中の画像要素に合わせる。
/// APIが申告するimageWidth/imageHeightは使わない
fn draw_detections(img: &HtmlImageElement, canvas: &HtmlCanvasElement, detections: &[Detection]) {
    let width = img.width();
    let height = img.height();
    if width == 0 || height == 0 {
        return;
    }

    canvas.set_width(width);
    canvas.set_height(height);

    let Some(ctx) = context_2d(canvas) else {
        console::error!("2Dコンテキストの取得に失敗");
        return;
    };

    let w = f64::from(width);
    let h = f64::from(height);

    ctx.clear_rect(0.0, 0.0, w, h);
    if ctx
        .draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, w, h)
        .is_err()
    {
        console::error!("画像の描画に失敗");
        return;
    }

    let style = OverlayStyle::default();
    ctx.set_line_width(style.line_width);
    ctx.set_font(style.font);

    for det in detections {
        // 退化ボックス（反転・面外）は黙ってスキップ
        let Some(clamped) = clamp_box(det.bbox, w, h) else {
            continue;
        };

        ctx.set_stroke_style_str(style.stroke_color);
        ctx.stroke_rect(clamped.x, clamped.y, clamped.width, clamped.height);

        let label = det.confidence_label();
        let text_width = ctx.measure_text(&label).map(|m| m.width()).unwrap_or(0.0);
        let layout = label_layout(&clamped, text_width, &style);

        ctx.set_fill_style_str(style.label_fill);
        ctx.fill_rect(layout.band_x, layout.band_y, layout.band_width, layout.band_height);

        ctx.set_fill_style_str(style.text_color);
        let _ = ctx.fill_text(&label, layout.text_x, layout.text_y);
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into().ok())
}
