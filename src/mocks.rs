//! Mock collaborators shared by the facade and cache tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{AclError, AclResult};
use crate::model::{Authentication, ObjectIdentity, Permission, Sid};
use crate::service::{
    Acl, AclService, DefaultObjectIdentityGenerator, DefaultObjectIdentityRetrievalStrategy,
    DefaultSidRetrievalStrategy, ObjectIdentityGenerator, ObjectIdentityRetrievalStrategy,
    SecuredObject, SidRetrievalStrategy,
};

/// Minimal secured domain object for tests.
pub(crate) struct TestObject {
    object_type: String,
    object_id: Option<String>,
}

impl TestObject {
    pub(crate) fn new(object_type: &str, object_id: &str) -> Self {
        Self {
            object_type: object_type.to_string(),
            object_id: Some(object_id.to_string()),
        }
    }

    /// An object with no primary key yet; resolves to no identity.
    pub(crate) fn unsaved(object_type: &str) -> Self {
        Self {
            object_type: object_type.to_string(),
            object_id: None,
        }
    }
}

impl SecuredObject for TestObject {
    fn object_type(&self) -> &str {
        &self.object_type
    }

    fn object_id(&self) -> Option<String> {
        self.object_id.clone()
    }
}

/// ACL stub with a fixed grant decision, recording every question asked.
pub(crate) struct StubAcl {
    granted: bool,
    pub(crate) calls: Mutex<Vec<(Vec<Permission>, Vec<Sid>, bool)>>,
}

impl StubAcl {
    pub(crate) fn new(granted: bool) -> Arc<Self> {
        Arc::new(Self {
            granted,
            calls: Mutex::new(Vec::new()),
        })
    }
}

impl Acl for StubAcl {
    fn is_granted(
        &self,
        permissions: &[Permission],
        sids: &[Sid],
        administrative_mode: bool,
    ) -> bool {
        self.calls.lock().unwrap().push((
            permissions.to_vec(),
            sids.to_vec(),
            administrative_mode,
        ));
        self.granted
    }
}

/// Call-counting wrapper around the default identity-retrieval strategy.
#[derive(Default)]
pub(crate) struct CountingOidStrategy {
    pub(crate) calls: AtomicUsize,
}

impl ObjectIdentityRetrievalStrategy for CountingOidStrategy {
    fn object_identity(&self, domain_object: &dyn SecuredObject) -> Option<ObjectIdentity> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        DefaultObjectIdentityRetrievalStrategy.object_identity(domain_object)
    }
}

/// Call-counting wrapper around the default generator.
#[derive(Default)]
pub(crate) struct CountingOidGenerator {
    pub(crate) calls: AtomicUsize,
}

impl ObjectIdentityGenerator for CountingOidGenerator {
    fn create_object_identity(&self, id: &str, object_type: &str) -> AclResult<ObjectIdentity> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        DefaultObjectIdentityGenerator.create_object_identity(id, object_type)
    }
}

/// Call-counting wrapper around the default sid-retrieval strategy.
#[derive(Default)]
pub(crate) struct CountingSidStrategy {
    pub(crate) calls: AtomicUsize,
}

impl SidRetrievalStrategy for CountingSidStrategy {
    fn sids(&self, authentication: &Authentication) -> Vec<Sid> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        DefaultSidRetrievalStrategy.sids(authentication)
    }
}

/// How mock reads behave.
#[derive(Clone, Copy)]
enum ReadBehavior {
    Succeed,
    FailService,
    FailNotFound,
}

/// Mock ACL service returning one configured ACL for every identity and
/// recording each read with its arguments.
pub(crate) struct MockAclService {
    acl: Arc<StubAcl>,
    read_behavior: ReadBehavior,
    pub(crate) read_acl_calls: Mutex<Vec<(ObjectIdentity, Vec<Sid>)>>,
    pub(crate) read_acls_calls: Mutex<Vec<(Vec<ObjectIdentity>, Vec<Sid>)>>,
    pub(crate) oid_strategy: Arc<CountingOidStrategy>,
    pub(crate) oid_generator: Arc<CountingOidGenerator>,
    pub(crate) sid_strategy: Arc<CountingSidStrategy>,
}

impl MockAclService {
    fn with_acl(acl: Arc<StubAcl>, read_behavior: ReadBehavior) -> Self {
        Self {
            acl,
            read_behavior,
            read_acl_calls: Mutex::new(Vec::new()),
            read_acls_calls: Mutex::new(Vec::new()),
            oid_strategy: Arc::new(CountingOidStrategy::default()),
            oid_generator: Arc::new(CountingOidGenerator::default()),
            sid_strategy: Arc::new(CountingSidStrategy::default()),
        }
    }

    /// Service whose ACL grants everything.
    pub(crate) fn granting() -> Self {
        Self::with_acl(StubAcl::new(true), ReadBehavior::Succeed)
    }

    /// Service whose ACL denies everything.
    pub(crate) fn denying() -> Self {
        Self::with_acl(StubAcl::new(false), ReadBehavior::Succeed)
    }

    /// Service whose reads fail with a backend error.
    pub(crate) fn failing() -> Self {
        Self::with_acl(StubAcl::new(true), ReadBehavior::FailService)
    }

    /// Service that has no ACL for any identity.
    pub(crate) fn without_acls() -> Self {
        Self::with_acl(StubAcl::new(true), ReadBehavior::FailNotFound)
    }

    pub(crate) fn acl(&self) -> Arc<StubAcl> {
        Arc::clone(&self.acl)
    }

    fn check_read(&self, object_identity: &ObjectIdentity) -> AclResult<()> {
        match self.read_behavior {
            ReadBehavior::Succeed => Ok(()),
            ReadBehavior::FailService => Err(AclError::Service {
                message: "backend unavailable".to_string(),
            }),
            ReadBehavior::FailNotFound => Err(AclError::AclNotFound {
                object_identity: object_identity.to_string(),
            }),
        }
    }
}

#[async_trait]
impl AclService for MockAclService {
    async fn read_acl_by_id(
        &self,
        object_identity: &ObjectIdentity,
        sids: &[Sid],
    ) -> AclResult<Arc<dyn Acl>> {
        self.check_read(object_identity)?;
        self.read_acl_calls
            .lock()
            .unwrap()
            .push((object_identity.clone(), sids.to_vec()));
        Ok(self.acl.clone() as Arc<dyn Acl>)
    }

    async fn read_acls_by_id(
        &self,
        object_identities: &[ObjectIdentity],
        sids: &[Sid],
    ) -> AclResult<HashMap<ObjectIdentity, Arc<dyn Acl>>> {
        if let Some(object_identity) = object_identities.first() {
            self.check_read(object_identity)?;
        }
        self.read_acls_calls
            .lock()
            .unwrap()
            .push((object_identities.to_vec(), sids.to_vec()));
        Ok(object_identities
            .iter()
            .map(|oid| (oid.clone(), self.acl.clone() as Arc<dyn Acl>))
            .collect())
    }

    fn object_identity_retrieval_strategy(&self) -> Arc<dyn ObjectIdentityRetrievalStrategy> {
        Arc::clone(&self.oid_strategy) as Arc<dyn ObjectIdentityRetrievalStrategy>
    }

    fn object_identity_generator(&self) -> Arc<dyn ObjectIdentityGenerator> {
        Arc::clone(&self.oid_generator) as Arc<dyn ObjectIdentityGenerator>
    }

    fn sid_retrieval_strategy(&self) -> Arc<dyn SidRetrievalStrategy> {
        Arc::clone(&self.sid_strategy) as Arc<dyn SidRetrievalStrategy>
    }
}
