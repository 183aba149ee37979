use std::rc::Rc;

use crate::api::{ApiClient, GlooTransport, Transport};
use crate::conf::ApiConf;
use crate::dialog::{BrowserDialogs, Dialogs};
use crate::session::{BrowserPersistence, Persistence, SessionStore};

/// Everything a view needs to talk to the outside world, provided through context.
#[derive(Clone, derivative::Derivative)]
#[derivative(Debug, PartialEq)]
pub struct Services {
    pub api: ApiClient,
    pub session: SessionStore,
    #[derivative(Debug = "ignore", PartialEq(compare_with = "Rc::ptr_eq"))]
    pub dialogs: Rc<dyn Dialogs>,
}

impl Services {
    pub fn new(
        conf: ApiConf,
        persistence: Rc<dyn Persistence>,
        transport: Rc<dyn Transport>,
        dialogs: Rc<dyn Dialogs>,
    ) -> Self {
        let session = SessionStore::new(persistence);

        Self {
            api: ApiClient::new(conf, session.clone(), transport),
            session,
            dialogs,
        }
    }

    pub fn browser(conf: ApiConf) -> Self {
        log::info!("using API at {}", conf.base_url());

        Self::new(
            conf,
            BrowserPersistence::or_memory(),
            Rc::new(GlooTransport),
            Rc::new(BrowserDialogs),
        )
    }
}
