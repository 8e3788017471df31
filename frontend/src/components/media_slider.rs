use yew::prelude::*;
use yew_hooks::prelude::*;

pub const AUTO_ADVANCE_MS: u32 = 4000;

pub fn is_video(url: &str) -> bool {
    [".mp4", ".webm", "youtube.com", "vimeo.com"]
        .iter()
        .any(|marker| url.contains(marker))
}

/// Carousel position and the flags that pause auto-advance.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideDeck {
    videos: Vec<bool>,
    index: usize,
    autoplay: bool,
    video_playing: bool,
}

impl SlideDeck {
    pub fn new(media: &[String]) -> Self {
        let mut deck = Self {
            videos: media.iter().map(|url| is_video(url)).collect(),
            index: 0,
            autoplay: true,
            video_playing: false,
        };
        deck.settle();
        deck
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        self.go_to(self.index + 1);
    }

    pub fn prev(&mut self) {
        let len = self.len().max(1);
        self.go_to(self.index + len - 1);
    }

    pub fn go_to(&mut self, index: usize) {
        self.index = index % self.len().max(1);
        self.settle();
    }

    pub fn hover_start(&mut self) {
        self.autoplay = false;
    }

    pub fn hover_end(&mut self) {
        if !self.video_playing {
            self.autoplay = true;
        }
    }

    pub fn video_started(&mut self) {
        self.video_playing = true;
    }

    pub fn video_stopped(&mut self) {
        self.video_playing = false;
    }

    pub fn is_advancing(&self) -> bool {
        self.autoplay && !self.video_playing && self.len() > 1
    }

    pub fn progress_percent(&self) -> f64 {
        if self.videos.is_empty() {
            return 0.0;
        }
        (self.index + 1) as f64 / self.len() as f64 * 100.0
    }

    // Auto-advance never carries the viewer past a video.
    fn settle(&mut self) {
        if self.videos.get(self.index).copied().unwrap_or(false) {
            self.autoplay = false;
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MediaSliderProps {
    pub media: Vec<String>,
    pub title: AttrValue,
}

#[function_component(MediaSlider)]
pub fn media_slider(props: &MediaSliderProps) -> Html {
    let deck = use_state(|| SlideDeck::new(&props.media));

    let apply = {
        let deck = deck.clone();
        move |change: fn(&mut SlideDeck)| {
            let mut next = (*deck).clone();
            change(&mut next);
            deck.set(next);
        }
    };

    {
        let apply = apply.clone();
        let millis = if deck.is_advancing() { AUTO_ADVANCE_MS } else { 0 };
        use_interval(move || apply(SlideDeck::next), millis);
    }

    let on_prev = {
        let apply = apply.clone();
        Callback::from(move |_: MouseEvent| apply(SlideDeck::prev))
    };
    let on_next = {
        let apply = apply.clone();
        Callback::from(move |_: MouseEvent| apply(SlideDeck::next))
    };
    let onmouseenter = {
        let apply = apply.clone();
        Callback::from(move |_: MouseEvent| apply(SlideDeck::hover_start))
    };
    let onmouseleave = {
        let apply = apply.clone();
        Callback::from(move |_: MouseEvent| apply(SlideDeck::hover_end))
    };
    let onplay = {
        let apply = apply.clone();
        Callback::from(move |_: Event| apply(SlideDeck::video_started))
    };
    let onpause = {
        let apply = apply.clone();
        Callback::from(move |_: Event| apply(SlideDeck::video_stopped))
    };

    let slides = props.media.iter().enumerate().map(|(i, src)| {
        let alt = format!("{} - Image {}", props.title, i + 1);
        html! {
            <div class="slide" key={i}>
                if is_video(src) {
                    <video src={src.clone()} controls={true} onplay={onplay.clone()} onpause={onpause.clone()} />
                } else {
                    <img src={src.clone()} {alt} />
                }
            </div>
        }
    });

    let dots = (0..deck.len()).map(|i| {
        let deck_handle = deck.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            let mut next = (*deck_handle).clone();
            next.go_to(i);
            deck_handle.set(next);
        });
        html! {
            <button class={classes!("slider-dot", (i == deck.index()).then(|| "active"))} {onclick} />
        }
    });

    html! {
        <div class="media-slider" {onmouseenter} {onmouseleave}>
            <style>
                {r#"
                .media-slider {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .slider-track {
                    display: flex;
                    transition: transform 0.7s ease-out;
                }
                .slide {
                    width: 100%;
                    height: 24rem;
                    flex-shrink: 0;
                }
                .slide img, .slide video {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .slider-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    background: rgba(0, 0, 0, 0.5);
                    color: #fff;
                    border: none;
                    border-radius: 50%;
                    width: 2.5rem;
                    height: 2.5rem;
                    cursor: pointer;
                    opacity: 0;
                    transition: all 0.3s ease;
                }
                .media-slider:hover .slider-arrow { opacity: 1; }
                .slider-arrow:hover { background: rgba(0, 0, 0, 0.7); }
                .slider-arrow.prev { left: 1rem; }
                .slider-arrow.next { right: 1rem; }
                .slider-dots {
                    position: absolute;
                    bottom: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    gap: 0.5rem;
                }
                .slider-dot {
                    width: 12px;
                    height: 12px;
                    border-radius: 50%;
                    border: none;
                    background: rgba(255, 255, 255, 0.6);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .slider-dot.active {
                    background: #84cc16;
                    transform: scale(1.1);
                }
                .slider-progress {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    width: 100%;
                    height: 4px;
                    background: rgba(0, 0, 0, 0.2);
                }
                .slider-progress div {
                    height: 100%;
                    background: #84cc16;
                    transition: width 0.7s ease-out;
                }
                "#}
            </style>
            <div class="slider-track" style={format!("transform: translateX(-{}%);", deck.index() * 100)}>
                { for slides }
            </div>
            if deck.len() > 1 {
                <button class="slider-arrow prev" onclick={on_prev}>{"←"}</button>
                <button class="slider-arrow next" onclick={on_next}>{"→"}</button>
                <div class="slider-dots">{ for dots }</div>
            }
            <div class="slider-progress">
                <div style={format!("width: {}%;", deck.progress_percent())}></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(urls: &[&str]) -> Vec<String> {
        urls.iter().map(|url| url.to_string()).collect()
    }

    #[test]
    fn detects_videos() {
        assert!(is_video("/assets/demo.mp4"));
        assert!(is_video("https://www.youtube.com/embed/x"));
        assert!(is_video("https://vimeo.com/123"));
        assert!(!is_video("/assets/cover.jpg"));
    }

    #[test]
    fn navigation_wraps_around() {
        let mut deck = SlideDeck::new(&media(&["a.jpg", "b.jpg", "c.jpg"]));
        deck.prev();
        assert_eq!(deck.index(), 2);
        deck.next();
        assert_eq!(deck.index(), 0);
        deck.go_to(7);
        assert_eq!(deck.index(), 1);
        assert!((deck.progress_percent() - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn hover_pauses_until_mouse_leaves() {
        let mut deck = SlideDeck::new(&media(&["a.jpg", "b.jpg"]));
        assert!(deck.is_advancing());
        deck.hover_start();
        assert!(!deck.is_advancing());
        deck.hover_end();
        assert!(deck.is_advancing());
    }

    #[test]
    fn playing_video_keeps_autoplay_off() {
        let mut deck = SlideDeck::new(&media(&["a.jpg", "b.jpg"]));
        deck.hover_start();
        deck.video_started();
        deck.hover_end();
        assert!(!deck.is_advancing());
        deck.video_stopped();
        deck.hover_end();
        assert!(deck.is_advancing());
    }

    #[test]
    fn reaching_a_video_stops_auto_advance() {
        let mut deck = SlideDeck::new(&media(&["a.jpg", "clip.mp4", "c.jpg"]));
        assert!(deck.is_advancing());
        deck.next();
        assert_eq!(deck.index(), 1);
        assert!(!deck.is_advancing());
    }

    #[test]
    fn single_slide_never_advances() {
        let mut deck = SlideDeck::new(&media(&["only.jpg"]));
        assert!(!deck.is_advancing());
        deck.next();
        assert_eq!(deck.index(), 0);
        assert_eq!(deck.progress_percent(), 100.0);
    }

    #[test]
    fn empty_deck_is_inert() {
        let mut deck = SlideDeck::new(&[]);
        deck.next();
        deck.prev();
        assert_eq!(deck.index(), 0);
        assert_eq!(deck.progress_percent(), 0.0);
    }
}
