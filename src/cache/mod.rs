//! Read-through ACL caching with TTL eviction.
//!
//! [`CachingAclService`] wraps any [`AclService`] and memoizes the `Acl`
//! aggregates it returns, keyed by object identity. The batched read path
//! forwards only cache misses to the inner service, which is what makes
//! warming through [`crate::AclPermissionCacheOptimizer`] pay off.
//!
//! # Cache safety
//!
//! Entries are keyed by object identity alone: an ACL cached for one caller
//! is served to every caller until it expires or is invalidated. Wrap a
//! service with this decorator only when its ACLs do not vary with the
//! requesting sids, and hook [`CachingAclService::invalidate`] into the
//! write path that mutates ACL data.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::error::AclResult;
use crate::model::{ObjectIdentity, Sid};
use crate::service::{
    Acl, AclService, ObjectIdentityGenerator, ObjectIdentityRetrievalStrategy,
    SidRetrievalStrategy,
};

/// Configuration for the ACL cache.
#[derive(Debug, Clone)]
pub struct AclCacheConfig {
    /// Maximum number of cached ACLs.
    pub max_capacity: u64,
    /// Time-to-live for cache entries.
    pub ttl: Duration,
}

impl Default for AclCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
            ttl: Duration::from_secs(30),
        }
    }
}

impl AclCacheConfig {
    /// Sets the maximum capacity.
    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Sets the entry TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Caching decorator around an [`AclService`].
pub struct CachingAclService<S> {
    inner: Arc<S>,
    cache: Cache<ObjectIdentity, Arc<dyn Acl>>,
    config: AclCacheConfig,
}

impl<S> std::fmt::Debug for CachingAclService<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachingAclService")
            .field("config", &self.config)
            .field("entry_count", &self.cache.entry_count())
            .finish()
    }
}

impl<S: AclService> CachingAclService<S> {
    /// Creates a caching decorator with the given configuration.
    pub fn new(inner: Arc<S>, config: AclCacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(config.ttl)
            .build();

        Self {
            inner,
            cache,
            config,
        }
    }

    /// Returns the configuration for this cache.
    pub fn config(&self) -> &AclCacheConfig {
        &self.config
    }

    /// Drops the cached ACL for one object identity.
    pub async fn invalidate(&self, object_identity: &ObjectIdentity) {
        self.cache.invalidate(object_identity).await;
    }

    /// Drops every cached ACL.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

#[async_trait]
impl<S: AclService> AclService for CachingAclService<S> {
    async fn read_acl_by_id(
        &self,
        object_identity: &ObjectIdentity,
        sids: &[Sid],
    ) -> AclResult<Arc<dyn Acl>> {
        if let Some(acl) = self.cache.get(object_identity).await {
            debug!(object_identity = %object_identity, "acl cache hit");
            return Ok(acl);
        }

        let acl = self.inner.read_acl_by_id(object_identity, sids).await?;
        self.cache
            .insert(object_identity.clone(), Arc::clone(&acl))
            .await;
        Ok(acl)
    }

    async fn read_acls_by_id(
        &self,
        object_identities: &[ObjectIdentity],
        sids: &[Sid],
    ) -> AclResult<HashMap<ObjectIdentity, Arc<dyn Acl>>> {
        let mut acls = HashMap::with_capacity(object_identities.len());
        let mut misses = Vec::new();

        for object_identity in object_identities {
            match self.cache.get(object_identity).await {
                Some(acl) => {
                    acls.insert(object_identity.clone(), acl);
                }
                None => misses.push(object_identity.clone()),
            }
        }

        if !misses.is_empty() {
            debug!(
                hits = acls.len(),
                misses = misses.len(),
                "forwarding acl cache misses"
            );
            let fetched = self.inner.read_acls_by_id(&misses, sids).await?;
            for (object_identity, acl) in fetched {
                self.cache
                    .insert(object_identity.clone(), Arc::clone(&acl))
                    .await;
                acls.insert(object_identity, acl);
            }
        }

        Ok(acls)
    }

    fn object_identity_retrieval_strategy(&self) -> Arc<dyn ObjectIdentityRetrievalStrategy> {
        self.inner.object_identity_retrieval_strategy()
    }

    fn object_identity_generator(&self) -> Arc<dyn ObjectIdentityGenerator> {
        self.inner.object_identity_generator()
    }

    fn sid_retrieval_strategy(&self) -> Arc<dyn SidRetrievalStrategy> {
        self.inner.sid_retrieval_strategy()
    }
}
