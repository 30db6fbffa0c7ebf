use crate::cart::Product;
use crate::transport::{ConnectionStatus, TransportEvent, TransportHandle};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavIntent, NavReducer, NavState, Pane};
use crate::ui::shop::{Outbound, ShopIntent, ShopReducer, ShopState};
use crate::ui::view::{self, ShopView};

/// Generic MVI dispatch: takes current state, runs reducer, stores the new
/// state and evaluates to the reducer's effect.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {{
        let (state, effect) = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
        $self.$field = state;
        effect
    }};
}

pub struct App {
    should_quit: bool,
    /// Shop model (MVI pattern).
    shop: ShopState,
    /// Cursor and edit buffer (MVI pattern).
    nav: NavState,
    /// Outbound half of the relay link (resource, managed outside MVI).
    transport: TransportHandle,
    connection: ConnectionStatus,
}

impl App {
    pub fn new(stock: Vec<Product>, transport: TransportHandle, connection: ConnectionStatus) -> Self {
        Self {
            should_quit: false,
            shop: ShopState::new(stock),
            nav: NavState::default(),
            transport,
            connection,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn shop(&self) -> &ShopState {
        &self.shop
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn connection(&self) -> &ConnectionStatus {
        &self.connection
    }

    pub fn view(&self) -> ShopView {
        view::render(&self.shop)
    }

    /// Runs the shop reducer and sends the new cart when it changed.
    pub fn dispatch(&mut self, intent: ShopIntent) {
        let outbound = dispatch_mvi!(self, shop, ShopReducer, intent);
        if let Outbound::Changed(payload) = outbound {
            self.transport.send(payload);
        }
        let stock_rows = self.shop.stock.len();
        let cart_rows = self.shop.cart.items().len();
        self.dispatch_nav(NavIntent::Clamp {
            stock_rows,
            cart_rows,
        });
    }

    /// Runs the navigation reducer. Returns the committed edit text, if any.
    pub fn dispatch_nav(&mut self, intent: NavIntent) -> Option<String> {
        dispatch_mvi!(self, nav, NavReducer, intent)
    }

    pub fn on_transport_event(&mut self, event: TransportEvent) {
        match event {
            TransportEvent::Message(text) => self.dispatch(ShopIntent::PeerCartsUpdate(text)),
            TransportEvent::Closed => self.connection = ConnectionStatus::Disconnected,
        }
    }

    pub fn move_selection(&mut self, up: bool) {
        let rows = self.focused_rows();
        let intent = if up {
            NavIntent::MoveUp { rows }
        } else {
            NavIntent::MoveDown { rows }
        };
        self.dispatch_nav(intent);
    }

    /// Activates the control under the cursor: the add control on a stock
    /// row, or the quantity field on a cart row.
    pub fn activate_selected(&mut self) {
        let view = self.view();
        match self.nav.focus {
            Pane::Stock => {
                if let Some(row) = view.stock.rows.get(self.nav.stock_row) {
                    self.dispatch(row.add.clone());
                }
            }
            Pane::Cart => {
                if let Some(row) = view.cart.rows().get(self.nav.cart_row) {
                    let text = row.quantity.text.clone();
                    self.dispatch_nav(NavIntent::BeginEdit { text });
                }
            }
        }
    }

    /// Finishes a quantity edit and feeds the text through the row's field.
    pub fn commit_edit(&mut self) {
        let Some(text) = self.dispatch_nav(NavIntent::CommitEdit) else {
            return;
        };
        let view = self.view();
        if let Some(row) = view.cart.rows().get(self.nav.cart_row) {
            self.dispatch(row.quantity.on_change(text));
        }
    }

    fn focused_rows(&self) -> usize {
        match self.nav.focus {
            Pane::Stock => self.shop.stock.len(),
            Pane::Cart => self.shop.cart.items().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::default_stock;
    use tokio::sync::mpsc::error::TryRecvError;

    fn make_app() -> (App, tokio::sync::mpsc::UnboundedReceiver<String>) {
        let (transport, outbound) = TransportHandle::channel();
        let app = App::new(
            default_stock(),
            transport,
            ConnectionStatus::Connected {
                url: "ws://test".to_string(),
            },
        );
        (app, outbound)
    }

    #[test]
    fn activating_stock_row_adds_and_sends() {
        let (mut app, mut outbound) = make_app();
        app.dispatch_nav(NavIntent::MoveDown { rows: 3 });
        app.activate_selected();

        assert_eq!(app.shop().cart.items().len(), 1);
        assert_eq!(app.shop().cart.items()[0].product.name, "Rocket");
        let payload = outbound.try_recv().expect("cart should be sent");
        assert!(payload.contains("Rocket"));
    }

    #[test]
    fn failed_edit_sends_nothing() {
        let (mut app, mut outbound) = make_app();
        app.activate_selected();
        let _ = outbound.try_recv();

        app.dispatch_nav(NavIntent::SwitchPane);
        app.activate_selected();
        assert_eq!(app.nav().edit.as_deref(), Some("1"));
        app.dispatch_nav(NavIntent::Backspace);
        app.dispatch_nav(NavIntent::Type('x'));
        app.commit_edit();

        assert!(app.shop().error.is_some());
        assert_eq!(app.shop().cart.qty(), 1);
        assert!(matches!(outbound.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn committed_edit_changes_quantity() {
        let (mut app, mut outbound) = make_app();
        app.activate_selected();
        let _ = outbound.try_recv();

        app.dispatch_nav(NavIntent::SwitchPane);
        app.activate_selected();
        app.dispatch_nav(NavIntent::Type('2'));
        app.commit_edit();

        assert_eq!(app.shop().cart.qty(), 12);
        assert!(app.shop().error.is_none());
        assert!(outbound.try_recv().is_ok());
    }

    #[test]
    fn transport_messages_update_peers_without_sending() {
        let (mut app, mut outbound) = make_app();
        app.on_transport_event(TransportEvent::Message("[{\"items\":[]}]".to_string()));
        assert_eq!(app.shop().peer_carts.len(), 1);
        assert!(matches!(outbound.try_recv(), Err(TryRecvError::Empty)));

        app.on_transport_event(TransportEvent::Closed);
        assert_eq!(app.connection(), &ConnectionStatus::Disconnected);
    }

    #[test]
    fn activating_empty_cart_pane_does_nothing() {
        let (mut app, _outbound) = make_app();
        app.dispatch_nav(NavIntent::SwitchPane);
        app.activate_selected();
        assert!(!app.nav().is_editing());
    }
}
