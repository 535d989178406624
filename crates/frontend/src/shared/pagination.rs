//! Paginação responsiva das listagens (membros, visitantes, pedidos de oração).
//!
//! `PaginationState` é a parte pura: tamanho de página por viewport, total de
//! páginas e janela de botões. `use_responsive_pagination` liga o estado ao
//! evento `resize` da janela.

use leptos::prelude::*;
use std::ops::RangeInclusive;

pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const MOBILE_PAGE_SIZE: usize = 10;
pub const DESKTOP_PAGE_SIZE: usize = 21;
const MOBILE_WINDOW: usize = 3;
const DESKTOP_WINDOW: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    /// 1-based
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub is_mobile: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl PaginationState {
    pub fn new(is_mobile: bool) -> Self {
        Self {
            current_page: 1,
            page_size: page_size_for(is_mobile),
            total_pages: 0,
            total_items: 0,
            is_mobile,
        }
    }

    /// Recalcula `is_mobile` e `page_size` para a largura da viewport.
    ///
    /// Não reinterpreta `current_page`; quem chama decide se recarrega.
    /// Retorna `true` quando o tamanho de página mudou.
    pub fn apply_viewport(&mut self, width_px: f64, breakpoint_px: f64) -> bool {
        let is_mobile = width_px < breakpoint_px;
        let page_size = page_size_for(is_mobile);
        let changed = page_size != self.page_size;
        self.is_mobile = is_mobile;
        self.page_size = page_size;
        changed
    }

    pub fn update_pagination(&mut self, total_items: usize, page: Option<usize>) {
        self.total_items = total_items;
        self.total_pages = total_items.div_ceil(self.page_size);
        if let Some(page) = page {
            self.current_page = page;
        }
    }

    /// Fora de `[1, total_pages]` é ignorado
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    pub fn next_page(&mut self) -> bool {
        if self.has_next() {
            self.go_to_page(self.current_page + 1)
        } else {
            false
        }
    }

    pub fn previous_page(&mut self) -> bool {
        if self.has_previous() {
            self.go_to_page(self.current_page - 1)
        } else {
            false
        }
    }

    pub fn first_page(&mut self) -> bool {
        self.go_to_page(1)
    }

    pub fn last_page(&mut self) -> bool {
        self.go_to_page(self.total_pages)
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn window_size(&self) -> usize {
        if self.is_mobile {
            MOBILE_WINDOW
        } else {
            DESKTOP_WINDOW
        }
    }

    /// Janela de números de página para os botões.
    ///
    /// Centrada na página atual e limitada a `[1, total_pages]`; quando o fim
    /// passaria do total, o início recua. Vazia quando não há páginas.
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        let total = self.total_pages;
        let window = self.window_size();
        if total <= window {
            return 1..=total;
        }

        let half = window / 2;
        let mut start = self.current_page.saturating_sub(half).max(1);
        let mut end = start.saturating_add(window - 1);
        if end > total {
            end = total;
            start = end + 1 - window;
        }
        start..=end
    }

    /// Intervalo 1-based dos itens exibidos: `(primeiro, último)`, `(0, 0)` se vazio
    pub fn item_range(&self) -> (usize, usize) {
        if self.total_items == 0 || self.current_page == 0 {
            return (0, 0);
        }
        let first = (self.current_page - 1) * self.page_size + 1;
        if first > self.total_items {
            return (0, 0);
        }
        let last = (first + self.page_size - 1).min(self.total_items);
        (first, last)
    }
}

/// Limita `page` a `[1, última página]` para `total_items` itens.
///
/// Com lista vazia a única página válida é a 1.
pub fn clamp_page(page: usize, total_items: usize, page_size: usize) -> usize {
    let last = total_items.div_ceil(page_size.max(1)).max(1);
    page.clamp(1, last)
}

fn page_size_for(is_mobile: bool) -> usize {
    if is_mobile {
        MOBILE_PAGE_SIZE
    } else {
        DESKTOP_PAGE_SIZE
    }
}

fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Handle reativo da paginação; `Copy`, pode ser movido para closures.
#[derive(Clone, Copy)]
pub struct ResponsivePagination {
    pub state: RwSignal<PaginationState>,
}

impl ResponsivePagination {
    /// Leitura sem rastreamento (handlers e cargas)
    pub fn current_page(&self) -> usize {
        self.state.with_untracked(|s| s.current_page)
    }

    pub fn page_size(&self) -> usize {
        self.state.with_untracked(|s| s.page_size)
    }

    /// Tamanho de página reativo: só notifica quando o valor muda
    pub fn page_size_memo(&self) -> Memo<usize> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.page_size))
    }

    pub fn update_pagination(&self, total_items: usize, page: Option<usize>) {
        self.state.update(|s| s.update_pagination(total_items, page));
    }

    pub fn go_to_page(&self, page: usize) {
        self.state.update(|s| {
            s.go_to_page(page);
        });
    }

    pub fn next_page(&self) {
        self.state.update(|s| {
            s.next_page();
        });
    }

    pub fn previous_page(&self) {
        self.state.update(|s| {
            s.previous_page();
        });
    }

    pub fn first_page(&self) {
        self.state.update(|s| {
            s.first_page();
        });
    }

    pub fn last_page(&self) {
        self.state.update(|s| {
            s.last_page();
        });
    }

    /// Volta para a página 1 sem checar limites (novo filtro/busca)
    pub fn reset(&self) {
        self.state.update(|s| s.current_page = 1);
    }
}

/// Cria o estado e escuta `resize` enquanto o componente estiver montado.
pub fn use_responsive_pagination(breakpoint_px: f64) -> ResponsivePagination {
    let initial_mobile = viewport_width()
        .map(|w| w < breakpoint_px)
        .unwrap_or(false);
    let state = RwSignal::new(PaginationState::new(initial_mobile));

    let handle = window_event_listener(leptos::ev::resize, move |_| {
        if let Some(width) = viewport_width() {
            let is_mobile = width < breakpoint_px;
            // só notifica quem depende do estado se algo mudou
            if state.with_untracked(|s| s.is_mobile) != is_mobile {
                state.update(|s| {
                    s.apply_viewport(width, breakpoint_px);
                });
            }
        }
    });
    on_cleanup(move || handle.remove());

    ResponsivePagination { state }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_total(is_mobile: bool, total_items: usize) -> PaginationState {
        let mut s = PaginationState::new(is_mobile);
        s.update_pagination(total_items, None);
        s
    }

    #[test]
    fn test_page_size_by_viewport() {
        let mut s = PaginationState::new(false);
        assert_eq!(s.page_size, 21);
        assert!(s.apply_viewport(500.0, MOBILE_BREAKPOINT_PX));
        assert!(s.is_mobile);
        assert_eq!(s.page_size, 10);
        assert!(!s.apply_viewport(767.9, MOBILE_BREAKPOINT_PX));
        assert!(s.apply_viewport(768.0, MOBILE_BREAKPOINT_PX));
        assert!(!s.is_mobile);
        assert_eq!(s.page_size, 21);
    }

    #[test]
    fn test_viewport_change_keeps_current_page() {
        let mut s = with_total(false, 100);
        s.go_to_page(4);
        s.apply_viewport(400.0, MOBILE_BREAKPOINT_PX);
        assert_eq!(s.current_page, 4);
    }

    #[test]
    fn test_total_pages_is_ceil() {
        for is_mobile in [true, false] {
            for total in 0..200 {
                let s = with_total(is_mobile, total);
                let expected = (total + s.page_size - 1) / s.page_size;
                assert_eq!(s.total_pages, expected);
            }
        }
        assert_eq!(with_total(false, 0).total_pages, 0);
        assert_eq!(with_total(false, 21).total_pages, 1);
        assert_eq!(with_total(false, 22).total_pages, 2);
    }

    #[test]
    fn test_update_pagination_sets_page() {
        let mut s = with_total(true, 95);
        s.update_pagination(95, Some(7));
        assert_eq!(s.current_page, 7);
        s.update_pagination(30, None);
        assert_eq!(s.current_page, 7);
        assert_eq!(s.total_pages, 3);
    }

    #[test]
    fn test_navigation_clamps() {
        let mut s = with_total(true, 45); // 5 páginas
        assert!(!s.go_to_page(0));
        assert!(!s.go_to_page(6));
        assert_eq!(s.current_page, 1);

        assert!(!s.previous_page());
        assert!(s.next_page());
        assert_eq!(s.current_page, 2);
        assert!(s.last_page());
        assert_eq!(s.current_page, 5);
        assert!(!s.next_page());
        assert_eq!(s.current_page, 5);
        assert!(s.first_page());
        assert_eq!(s.current_page, 1);
    }

    #[test]
    fn test_navigation_without_pages() {
        let mut s = with_total(false, 0);
        assert!(!s.last_page());
        assert!(!s.first_page());
        assert!(!s.has_next());
        assert!(!s.has_previous());
        assert_eq!(s.current_page, 1);
    }

    #[test]
    fn test_has_next_previous() {
        let mut s = with_total(false, 50); // 3 páginas
        assert!(s.has_next());
        assert!(!s.has_previous());
        s.go_to_page(3);
        assert!(!s.has_next());
        assert!(s.has_previous());
        s.update_pagination(10, None);
        assert!(!s.has_next());
    }

    #[test]
    fn test_page_numbers_fit() {
        let s = with_total(false, 100); // 5 páginas, janela 7
        assert_eq!(s.page_numbers().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(with_total(false, 0).page_numbers().count(), 0);
    }

    #[test]
    fn test_page_numbers_centered_and_clamped() {
        let mut s = with_total(false, 21 * 20); // 20 páginas
        s.go_to_page(10);
        assert_eq!(s.page_numbers().collect::<Vec<_>>(), vec![7, 8, 9, 10, 11, 12, 13]);
        s.go_to_page(2);
        assert_eq!(s.page_numbers().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7]);
        s.go_to_page(19);
        assert_eq!(s.page_numbers().collect::<Vec<_>>(), vec![14, 15, 16, 17, 18, 19, 20]);

        let mut m = with_total(true, 10 * 9); // 9 páginas, janela 3
        m.go_to_page(5);
        assert_eq!(m.page_numbers().collect::<Vec<_>>(), vec![4, 5, 6]);
        m.go_to_page(9);
        assert_eq!(m.page_numbers().collect::<Vec<_>>(), vec![7, 8, 9]);
    }

    #[test]
    fn test_page_numbers_properties() {
        for is_mobile in [true, false] {
            for total_items in [0, 1, 9, 10, 11, 50, 147, 300, 1000] {
                let mut s = with_total(is_mobile, total_items);
                for page in 1..=s.total_pages.max(1) {
                    s.go_to_page(page);
                    let pages: Vec<usize> = s.page_numbers().collect();
                    assert_eq!(pages.len(), s.total_pages.min(s.window_size()));
                    assert!(pages.windows(2).all(|w| w[0] < w[1]));
                    assert!(pages.iter().all(|p| *p >= 1 && *p <= s.total_pages));
                    if !pages.is_empty() {
                        assert!(pages.contains(&s.current_page));
                    }
                    // recalculado a cada chamada
                    assert_eq!(s.page_numbers().collect::<Vec<_>>(), pages);
                }
            }
        }
    }

    #[test]
    fn test_page_numbers_near_usize_max() {
        let mut s = with_total(false, 21 * 20);
        s.update_pagination(21 * 20, Some(usize::MAX - 1));
        assert_eq!(s.page_numbers().collect::<Vec<_>>(), vec![14, 15, 16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_clamp_page() {
        // 22 itens, página 2; exclui o único item da página 2
        assert_eq!(clamp_page(2, 22, 21), 2);
        assert_eq!(clamp_page(2, 21, 21), 1);
        assert_eq!(clamp_page(5, 45, 10), 5);
        assert_eq!(clamp_page(5, 40, 10), 4);
        assert_eq!(clamp_page(3, 0, 10), 1);
        assert_eq!(clamp_page(0, 50, 10), 1);
    }

    #[test]
    fn test_item_range() {
        let mut s = with_total(false, 50);
        assert_eq!(s.item_range(), (1, 21));
        s.go_to_page(3);
        assert_eq!(s.item_range(), (43, 50));
        assert_eq!(with_total(false, 0).item_range(), (0, 0));
    }
}
