use crate::areas::settings::Settings;
use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};

pub struct Dolly {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
}

impl Dolly {
    pub fn new(settings: &Settings, writer: Box<dyn std::io::Write>) -> Self {
        let workspace = Workspace::new(settings.root().to_path_buf().into_boxed_path());

        Dolly {
            writer: RefCell::new(writer),
            workspace,
        }
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
