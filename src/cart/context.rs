use std::ops::Deref;
use std::rc::Rc;

use yew::prelude::*;

use crate::cart::store::{CartStore, NewCartItem};
use crate::storage::{BrowserStorage, KeyValueStore};

pub enum CartAction {
    Add(NewCartItem),
    Remove(String),
    UpdateQuantity { id: String, quantity: u32 },
    UpdatePackSize { id: String, pack_size: u32, unit_price: u32 },
    Clear,
}

/// Reducer state handed to the component tree. All writes go through
/// [`CartAction`]; components only ever read the store.
#[derive(Clone, Debug, PartialEq)]
pub struct CartState<S = BrowserStorage> {
    store: CartStore<S>,
}

impl<S: KeyValueStore> CartState<S> {
    pub fn new(storage: S) -> Self {
        Self {
            store: CartStore::load(storage),
        }
    }
}

impl Default for CartState<BrowserStorage> {
    fn default() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S> Deref for CartState<S> {
    type Target = CartStore<S>;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

impl<S: KeyValueStore + Clone + 'static> Reducible for CartState<S> {
    type Action = CartAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut store = self.store.clone();
        match action {
            CartAction::Add(item) => store.add_item(item),
            CartAction::Remove(id) => store.remove_item(&id),
            CartAction::UpdateQuantity { id, quantity } => store.update_quantity(&id, quantity),
            CartAction::UpdatePackSize { id, pack_size, unit_price } => {
                store.update_pack_size(&id, pack_size, unit_price)
            }
            CartAction::Clear => store.clear(),
        }
        Rc::new(Self { store })
    }
}

pub type CartContext = UseReducerHandle<CartState>;

#[derive(Properties, PartialEq)]
pub struct CartProviderProps {
    pub children: Children,
}

#[function_component(CartProvider)]
pub fn cart_provider(props: &CartProviderProps) -> Html {
    let cart = use_reducer(CartState::<BrowserStorage>::default);

    html! {
        <ContextProvider<CartContext> context={cart}>
            { for props.children.iter() }
        </ContextProvider<CartContext>>
    }
}
