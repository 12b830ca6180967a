#[cfg(test)]
pub const VALID_POST: &str = r##"---
author: Nitya
pubDatetime: 2025-03-14T09:30:00Z
title: Running AKS behind a private endpoint
postSlug: aks-private-endpoint
featured: true
draft: false
tags:
  - AKS
  - Private
  - Pulumi
description: What it takes to keep the API server off the public internet.
---

Kubernetes API servers reachable from any coffee shop are a liability.

## Why private clusters

With a private endpoint, the control plane only answers inside the vnet.
Everything else goes through a jump box or a build agent.
"##;

#[cfg(test)]
pub const DRAFT_POST: &str = r##"---
author: Nitya
pubDatetime: 2025-04-02T18:00:00Z
title: Draft notes on Dockerfile caching
draft: true
tags: [Docker]
description: Not ready yet.
---

Layer ordering matters more than people think.
"##;

#[cfg(test)]
pub const DOUBLE_FRONTMATTER_POST: &str = r##"---
author: Nitya
pubDatetime: 2025-02-01T08:00:00Z
title: First revision
draft: false
---

The original take on the subject.

---
author: Nitya
pubDatetime: 2025-02-03T08:00:00Z
title: Second revision
draft: false
---

An edited copy that was pasted below the first one by mistake.
"##;
